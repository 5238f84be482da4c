use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

/// One attendance mark. The (student_id, date) pair is the natural key;
/// marking the same day twice replaces the earlier status.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttendanceRecord {
    pub student_id: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub status: AttendanceStatus,
    pub subject: String,
    pub marked_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked_at: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    pub fn new(
        student_id: &str,
        date: &str,
        status: AttendanceStatus,
        subject: &str,
        marked_by: &str,
    ) -> Self {
        AttendanceRecord {
            student_id: student_id.to_string(),
            date: date.to_string(),
            status,
            subject: subject.to_string(),
            marked_by: marked_by.to_string(),
            marked_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_creation() {
        let record = AttendanceRecord::new(
            "student-1",
            "2026-01-15",
            AttendanceStatus::Late,
            "Mathematics",
            "teacher-1",
        );
        assert_eq!(record.date, "2026-01-15");
        assert_eq!(record.status, AttendanceStatus::Late);
        assert!(record.marked_at.is_some());
    }

    #[test]
    fn test_status_serialization_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::from_str::<AttendanceStatus>("\"late\"").unwrap(),
            AttendanceStatus::Late
        );
    }
}
