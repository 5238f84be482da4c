use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Material, User, UserRole};

/// Public view of a user record. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            user_id: user.user_id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadMaterialResponse {
    pub status: String,
    pub material_id: String,
    pub filename: String,
}

/// Material metadata without the internal blob reference.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialInfoResponse {
    pub material_id: String,
    pub teacher_id: String,
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub filename: String,
    pub file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl From<Material> for MaterialInfoResponse {
    fn from(material: Material) -> Self {
        MaterialInfoResponse {
            material_id: material.material_id,
            teacher_id: material.teacher_id,
            section: material.section,
            subject: material.subject,
            filename: material.filename,
            file_size: material.file_size,
            uploaded_at: material.uploaded_at,
        }
    }
}

/// Trimmed material listing for the student-facing routes.
#[derive(Debug, Clone, Serialize)]
pub struct StudentMaterialResponse {
    pub material_id: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl From<Material> for StudentMaterialResponse {
    fn from(material: Material) -> Self {
        StudentMaterialResponse {
            material_id: material.material_id,
            filename: material.filename,
            subject: material.subject,
            file_size: material.file_size,
            uploaded_at: material.uploaded_at,
        }
    }
}

/// Outcome of a quiz generation. `degraded` marks placeholder content
/// produced when the LLM provider was unreachable; degraded output is
/// returned but never persisted, so `quiz_id` is absent.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<String>,
    pub quiz: String,
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_id: Option<String>,
    pub subject: String,
    pub lecture_number: i32,
    pub summary: String,
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceStatsResponse {
    pub total_classes: u64,
    pub present_count: u64,
    pub absent_count: u64,
    pub late_count: u64,
    /// Percentage of classes attended, rounded to two decimals.
    pub attendance_rate: f64,
}
