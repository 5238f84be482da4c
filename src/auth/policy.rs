//! Centralized access policy: one table mapping each protected operation to
//! its required role and ownership rule, so per-route checks cannot drift.

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::UserRole,
};

/// Every role-gated or ownership-gated operation exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    UploadMaterial,
    GenerateQuiz,
    ListOwnMaterials,
    Summarize,
    ViewOwnSummaries,
    RecordGrade,
    MarkAttendance,
    ViewGrades,
    ViewAttendance,
    ViewAttendanceStats,
    ViewRecommendations,
}

/// Ownership rule applied after the role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ownership {
    /// No per-resource restriction.
    Any,
    /// Students may only touch records keyed by their own id; teachers bypass.
    StudentSelf,
}

struct Policy {
    required_role: Option<UserRole>,
    ownership: Ownership,
}

const fn policy_for(operation: Operation) -> Policy {
    match operation {
        Operation::UploadMaterial
        | Operation::GenerateQuiz
        | Operation::ListOwnMaterials
        | Operation::RecordGrade
        | Operation::MarkAttendance => Policy {
            required_role: Some(UserRole::Teacher),
            ownership: Ownership::Any,
        },
        Operation::Summarize | Operation::ViewOwnSummaries => Policy {
            required_role: Some(UserRole::Student),
            ownership: Ownership::Any,
        },
        Operation::ViewGrades
        | Operation::ViewAttendance
        | Operation::ViewAttendanceStats
        | Operation::ViewRecommendations => Policy {
            required_role: None,
            ownership: Ownership::StudentSelf,
        },
    }
}

/// Checks the caller's claims against the policy table.
///
/// `resource_student` is the student id the operation targets, for operations
/// whose ownership rule needs one.
pub fn authorize(
    claims: &Claims,
    operation: Operation,
    resource_student: Option<&str>,
) -> AppResult<()> {
    let policy = policy_for(operation);

    if let Some(required) = policy.required_role {
        if claims.role != required {
            return Err(AppError::Forbidden(format!("{} access required", required)));
        }
    }

    if policy.ownership == Ownership::StudentSelf && claims.role == UserRole::Student {
        let target = resource_student.ok_or_else(|| {
            AppError::Forbidden("Student id required for this operation".to_string())
        })?;
        if target != claims.sub {
            return Err(AppError::Forbidden(
                "Students can only access their own records".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, role: UserRole) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: format!("{}@example.com", sub),
            role,
            iat: 0,
            exp: 9999999999,
        }
    }

    #[test]
    fn test_teacher_only_operations_reject_students() {
        let student = claims("student-1", UserRole::Student);
        for op in [
            Operation::UploadMaterial,
            Operation::GenerateQuiz,
            Operation::RecordGrade,
            Operation::MarkAttendance,
        ] {
            assert!(matches!(
                authorize(&student, op, None),
                Err(AppError::Forbidden(_))
            ));
        }
    }

    #[test]
    fn test_student_only_operations_reject_teachers() {
        let teacher = claims("teacher-1", UserRole::Teacher);
        assert!(authorize(&teacher, Operation::Summarize, None).is_err());
        assert!(authorize(&teacher, Operation::ViewOwnSummaries, None).is_err());
    }

    #[test]
    fn test_student_can_view_own_grades() {
        let student = claims("student-1", UserRole::Student);
        assert!(authorize(&student, Operation::ViewGrades, Some("student-1")).is_ok());
    }

    #[test]
    fn test_student_cannot_view_other_grades() {
        let student = claims("student-1", UserRole::Student);
        assert!(matches!(
            authorize(&student, Operation::ViewGrades, Some("student-2")),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_teacher_bypasses_ownership_check() {
        let teacher = claims("teacher-1", UserRole::Teacher);
        assert!(authorize(&teacher, Operation::ViewGrades, Some("student-2")).is_ok());
        assert!(authorize(&teacher, Operation::ViewRecommendations, Some("student-2")).is_ok());
    }
}
