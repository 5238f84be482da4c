use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student's score for one quiz. The (student_id, quiz_id) pair is the
/// natural key; writes upsert on it so re-grading replaces the old record.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Grade {
    pub student_id: String,
    pub quiz_id: String,
    pub score: f64,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub recorded_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl Grade {
    pub fn new(
        student_id: &str,
        quiz_id: &str,
        score: f64,
        subject: &str,
        feedback: Option<String>,
        recorded_by: &str,
    ) -> Self {
        Grade {
            student_id: student_id.to_string(),
            quiz_id: quiz_id.to_string(),
            score,
            subject: subject.to_string(),
            feedback,
            recorded_by: recorded_by.to_string(),
            recorded_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_creation() {
        let grade = Grade::new("student-1", "quiz-1", 87.5, "Science", None, "teacher-1");
        assert_eq!(grade.student_id, "student-1");
        assert_eq!(grade.quiz_id, "quiz-1");
        assert_eq!(grade.score, 87.5);
        assert!(grade.recorded_at.is_some());
    }
}
