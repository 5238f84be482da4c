use std::collections::BTreeMap;
use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{AttendanceRecord, AttendanceStatus, Grade, Recommendation},
        dto::{
            request::{MarkAttendanceRequest, RecordGradeRequest},
            response::AttendanceStatsResponse,
        },
    },
    repositories::{AttendanceRepository, GradeRepository, RecommendationRepository},
};

const WEAK_SUBJECT_THRESHOLD: f64 = 60.0;

pub struct MonitoringService {
    grades: Arc<dyn GradeRepository>,
    attendance: Arc<dyn AttendanceRepository>,
    recommendations: Arc<dyn RecommendationRepository>,
}

impl MonitoringService {
    pub fn new(
        grades: Arc<dyn GradeRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        recommendations: Arc<dyn RecommendationRepository>,
    ) -> Self {
        Self {
            grades,
            attendance,
            recommendations,
        }
    }

    /// Upserts on (student_id, quiz_id); re-grading replaces the old score.
    pub async fn record_grade(
        &self,
        teacher_id: &str,
        student_id: &str,
        request: RecordGradeRequest,
    ) -> AppResult<Grade> {
        request.validate()?;

        let grade = Grade::new(
            student_id,
            &request.quiz_id,
            request.score,
            &request.subject,
            request.feedback,
            teacher_id,
        );

        self.grades.upsert(grade).await
    }

    pub async fn student_grades(&self, student_id: &str) -> AppResult<Vec<Grade>> {
        self.grades.find_by_student(student_id).await
    }

    /// Upserts on (student_id, date); marking the same day twice keeps only
    /// the second status.
    pub async fn mark_attendance(
        &self,
        teacher_id: &str,
        student_id: &str,
        request: MarkAttendanceRequest,
    ) -> AppResult<AttendanceRecord> {
        request.validate()?;

        let subject = request.subject.as_deref().unwrap_or("General");
        let record =
            AttendanceRecord::new(student_id, &request.date, request.status, subject, teacher_id);

        self.attendance.upsert(record).await
    }

    pub async fn student_attendance(&self, student_id: &str) -> AppResult<Vec<AttendanceRecord>> {
        self.attendance.find_by_student(student_id).await
    }

    pub async fn attendance_stats(&self, student_id: &str) -> AppResult<AttendanceStatsResponse> {
        let records = self.attendance.find_by_student(student_id).await?;
        Ok(compute_attendance_stats(&records))
    }

    /// Derives a fresh advice snapshot from stored grades, persists it
    /// append-only, and returns it. With no grades on file, nothing is
    /// persisted and a "no data" snapshot is returned.
    pub async fn generate_recommendations(&self, student_id: &str) -> AppResult<Recommendation> {
        let grades = self.grades.find_by_student(student_id).await?;

        let Some(recommendation) = build_recommendation(student_id, &grades) else {
            return Ok(Recommendation::new(
                student_id,
                vec!["No data available to generate recommendations.".to_string()],
                0.0,
                vec![],
            ));
        };

        self.recommendations.create(recommendation).await
    }

    /// Newest snapshot only; older ones stay in storage.
    pub async fn latest_recommendation(
        &self,
        student_id: &str,
    ) -> AppResult<Option<Recommendation>> {
        self.recommendations.find_latest(student_id).await
    }
}

fn compute_attendance_stats(records: &[AttendanceRecord]) -> AttendanceStatsResponse {
    let total_classes = records.len() as u64;
    let present_count = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count() as u64;
    let absent_count = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Absent)
        .count() as u64;
    let late_count = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Late)
        .count() as u64;

    let attendance_rate = if total_classes > 0 {
        let rate = (present_count as f64 / total_classes as f64) * 100.0;
        (rate * 100.0).round() / 100.0
    } else {
        0.0
    };

    AttendanceStatsResponse {
        total_classes,
        present_count,
        absent_count,
        late_count,
        attendance_rate,
    }
}

/// Pure derivation: tiered advice from the overall average, plus any subject
/// whose own average falls below the weak-subject threshold. Returns `None`
/// when there are no grades to derive from.
fn build_recommendation(student_id: &str, grades: &[Grade]) -> Option<Recommendation> {
    if grades.is_empty() {
        return None;
    }

    let average = grades.iter().map(|g| g.score).sum::<f64>() / grades.len() as f64;

    let mut subject_scores: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for grade in grades {
        subject_scores
            .entry(grade.subject.as_str())
            .or_default()
            .push(grade.score);
    }

    let weak_subjects: Vec<String> = subject_scores
        .iter()
        .filter(|(_, scores)| {
            scores.iter().sum::<f64>() / (scores.len() as f64) < WEAK_SUBJECT_THRESHOLD
        })
        .map(|(subject, _)| subject.to_string())
        .collect();

    let mut advice: Vec<String> = if average >= 85.0 {
        vec![
            "Keep up the great work!".to_string(),
            "Consider mentoring your peers.".to_string(),
            "Challenge yourself with advanced topics.".to_string(),
        ]
    } else if average >= 70.0 {
        vec![
            "You're doing well, but there's room for improvement.".to_string(),
            "Review quizzes regularly to maintain your performance.".to_string(),
            "Focus on consistent study habits.".to_string(),
        ]
    } else if average >= 60.0 {
        vec![
            "Focus more on weak areas.".to_string(),
            "Consider forming study groups.".to_string(),
            "Review materials before each class.".to_string(),
        ]
    } else {
        vec![
            "Seek help from the teacher during office hours.".to_string(),
            "Focus on fundamental concepts.".to_string(),
            "Create a structured study schedule.".to_string(),
            "Practice with additional exercises.".to_string(),
        ]
    };

    if !weak_subjects.is_empty() {
        advice.push(format!("Focus more on: {}", weak_subjects.join(", ")));
    }

    Some(Recommendation::new(
        student_id,
        advice,
        average,
        weak_subjects,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(quiz_id: &str, subject: &str, score: f64) -> Grade {
        Grade::new("student-1", quiz_id, score, subject, None, "teacher-1")
    }

    #[test]
    fn test_high_average_gets_top_tier() {
        let grades = vec![grade("q1", "Math", 90.0), grade("q2", "Science", 88.0)];
        let rec = build_recommendation("student-1", &grades).unwrap();

        assert!(rec.advice[0].contains("Keep up the great work"));
        assert!(rec.weak_subjects.is_empty());
        assert_eq!(rec.average_score, 89.0);
    }

    #[test]
    fn test_middle_tiers() {
        let grades = vec![grade("q1", "Math", 75.0)];
        let rec = build_recommendation("student-1", &grades).unwrap();
        assert!(rec.advice[0].contains("room for improvement"));

        let grades = vec![grade("q1", "Math", 62.0)];
        let rec = build_recommendation("student-1", &grades).unwrap();
        assert!(rec.advice[0].contains("Focus more on weak areas"));
    }

    #[test]
    fn test_failing_average_gets_remedial_tier() {
        let grades = vec![grade("q1", "Math", 40.0), grade("q2", "Science", 55.0)];
        let rec = build_recommendation("student-1", &grades).unwrap();

        assert!(rec.advice[0].contains("Seek help from the teacher"));
        assert_eq!(rec.weak_subjects, vec!["Math", "Science"]);
    }

    #[test]
    fn test_weak_subject_flagged_below_threshold() {
        let grades = vec![
            grade("q1", "Math", 95.0),
            grade("q2", "Math", 90.0),
            grade("q3", "History", 50.0),
        ];
        let rec = build_recommendation("student-1", &grades).unwrap();

        assert_eq!(rec.weak_subjects, vec!["History"]);
        assert!(rec
            .advice
            .last()
            .unwrap()
            .contains("Focus more on: History"));
    }

    #[test]
    fn test_subject_average_not_single_score_decides_weakness() {
        // Single bad quiz, but the subject average stays above 60.
        let grades = vec![grade("q1", "Math", 95.0), grade("q2", "Math", 40.0)];
        let rec = build_recommendation("student-1", &grades).unwrap();
        assert!(rec.weak_subjects.is_empty());
    }

    #[test]
    fn test_no_grades_yields_none() {
        assert!(build_recommendation("student-1", &[]).is_none());
    }

    #[test]
    fn test_attendance_stats() {
        let records = vec![
            AttendanceRecord::new("s1", "2026-01-01", AttendanceStatus::Present, "Math", "t1"),
            AttendanceRecord::new("s1", "2026-01-02", AttendanceStatus::Absent, "Math", "t1"),
            AttendanceRecord::new("s1", "2026-01-03", AttendanceStatus::Late, "Math", "t1"),
            AttendanceRecord::new("s1", "2026-01-04", AttendanceStatus::Present, "Math", "t1"),
        ];

        let stats = compute_attendance_stats(&records);
        assert_eq!(stats.total_classes, 4);
        assert_eq!(stats.present_count, 2);
        assert_eq!(stats.absent_count, 1);
        assert_eq!(stats.late_count, 1);
        assert_eq!(stats.attendance_rate, 50.0);
    }

    #[test]
    fn test_attendance_stats_empty() {
        let stats = compute_attendance_stats(&[]);
        assert_eq!(stats.total_classes, 0);
        assert_eq!(stats.attendance_rate, 0.0);
    }

    #[test]
    fn test_attendance_rate_rounds_to_two_decimals() {
        let records = vec![
            AttendanceRecord::new("s1", "2026-01-01", AttendanceStatus::Present, "Math", "t1"),
            AttendanceRecord::new("s1", "2026-01-02", AttendanceStatus::Present, "Math", "t1"),
            AttendanceRecord::new("s1", "2026-01-03", AttendanceStatus::Absent, "Math", "t1"),
        ];

        let stats = compute_attendance_stats(&records);
        assert_eq!(stats.attendance_rate, 66.67);
    }
}
