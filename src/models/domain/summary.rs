use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored lecture summary produced for a student.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Summary {
    pub summary_id: String,
    pub student_id: String,
    pub subject: String,
    pub lecture_number: i32,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Summary {
    pub fn new(student_id: &str, subject: &str, lecture_number: i32, summary: &str) -> Self {
        Summary {
            summary_id: uuid::Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            subject: subject.to_string(),
            lecture_number,
            summary: summary.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_creation() {
        let summary = Summary::new("student-1", "History", 3, "The revolution began...");
        assert_eq!(summary.student_id, "student-1");
        assert_eq!(summary.lecture_number, 3);
        assert!(summary.created_at.is_some());
    }
}
