use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata record for an uploaded course material. The file bytes themselves
/// live in the blob store under `file_id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Material {
    pub material_id: String,
    pub file_id: String,
    pub teacher_id: String,
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub filename: String,
    pub file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl Material {
    pub fn new(
        file_id: &str,
        teacher_id: &str,
        section: &str,
        subject: Option<String>,
        filename: &str,
        file_size: u64,
    ) -> Self {
        Material {
            material_id: uuid::Uuid::new_v4().to_string(),
            file_id: file_id.to_string(),
            teacher_id: teacher_id.to_string(),
            section: section.to_string(),
            subject,
            filename: filename.to_string(),
            file_size,
            uploaded_at: Some(Utc::now()),
        }
    }
}
