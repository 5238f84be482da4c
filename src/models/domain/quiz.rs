use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated quiz, stored as the raw text returned by the LLM.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub quiz_id: String,
    pub teacher_id: String,
    pub section: String,
    pub subject: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(teacher_id: &str, section: &str, subject: &str, content: &str) -> Self {
        Quiz {
            quiz_id: uuid::Uuid::new_v4().to_string(),
            teacher_id: teacher_id.to_string(),
            section: section.to_string(),
            subject: subject.to_string(),
            content: content.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_creation() {
        let quiz = Quiz::new("teacher-1", "Section A", "Science", "1. What is...?");
        assert_eq!(quiz.teacher_id, "teacher-1");
        assert_eq!(quiz.subject, "Science");
        assert!(quiz.created_at.is_some());
    }
}
