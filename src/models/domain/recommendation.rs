use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A derived study-advice snapshot. Recomputed on demand and appended;
/// reads return only the newest snapshot.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Recommendation {
    pub student_id: String,
    pub advice: Vec<String>,
    pub average_score: f64,
    pub weak_subjects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Recommendation {
    pub fn new(
        student_id: &str,
        advice: Vec<String>,
        average_score: f64,
        weak_subjects: Vec<String>,
    ) -> Self {
        Recommendation {
            student_id: student_id.to_string(),
            advice,
            average_score,
            weak_subjects,
            generated_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_creation() {
        let rec = Recommendation::new(
            "student-1",
            vec!["Keep up the great work!".to_string()],
            91.0,
            vec![],
        );
        assert_eq!(rec.student_id, "student-1");
        assert!(rec.weak_subjects.is_empty());
        assert!(rec.generated_at.is_some());
    }
}
