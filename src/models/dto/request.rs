use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{AttendanceStatus, UserRole};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub full_name: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub role: UserRole,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub subject: String,

    #[validate(length(min = 1, max = 50))]
    pub level: String,

    #[validate(range(min = 1, max = 20))]
    pub num_questions: u32,

    /// Ids of uploaded materials to draw the quiz from; the first one is used.
    pub material_ids: Option<Vec<String>>,

    pub section: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordGradeRequest {
    #[validate(length(min = 1))]
    pub quiz_id: String,

    #[validate(length(min = 1, max = 100))]
    pub subject: String,

    #[validate(range(min = 0.0, max = 100.0))]
    pub score: f64,

    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkAttendanceRequest {
    #[validate(length(min = 1, max = 32))]
    pub date: String,

    pub status: AttendanceStatus,

    pub subject: Option<String>,
}

#[derive(Debug, MultipartForm)]
pub struct UploadMaterialForm {
    #[multipart(limit = "32MiB")]
    pub file: Bytes,
    pub section: Text<String>,
    pub subject: Option<Text<String>>,
}

#[derive(Debug, MultipartForm)]
pub struct SummarizeForm {
    pub subject: Text<String>,
    pub lecture_number: Text<i32>,
    pub lecture_text: Option<Text<String>>,
    #[multipart(limit = "32MiB")]
    pub file: Option<Bytes>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            full_name: "Jane Doe".to_string(),
            password: "hunter2hunter2".to_string(),
            role: UserRole::Student,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let request = RegisterRequest {
            email: "jane@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            password: "short".to_string(),
            role: UserRole::Student,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_grade_request_score_bounds() {
        let mut request = RecordGradeRequest {
            quiz_id: "quiz-1".to_string(),
            subject: "Science".to_string(),
            score: 101.0,
            feedback: None,
        };
        assert!(request.validate().is_err());

        request.score = 87.5;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_quiz_request_question_count_bounds() {
        let request = GenerateQuizRequest {
            subject: "Mathematics".to_string(),
            level: "Intermediate".to_string(),
            num_questions: 0,
            material_ids: None,
            section: None,
        };
        assert!(request.validate().is_err());
    }
}
