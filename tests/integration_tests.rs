use secrecy::SecretString;

use classpilot_server::{
    auth::{authorize, Claims, JwtService, Operation},
    models::domain::{User, UserRole},
};

fn jwt_service() -> JwtService {
    JwtService::new(&SecretString::from("integration-test-secret".to_string()), 30)
}

fn claims_for(role: UserRole) -> Claims {
    let user = User::new("it@test.com", "Integration Test", role, "$argon2id$x");
    Claims::new(&user, 30)
}

#[actix_web::test]
async fn test_token_roundtrip_preserves_identity() {
    let service = jwt_service();
    let user = User::new("it@test.com", "Integration Test", UserRole::Teacher, "$x");

    let token = service.create_token(&user).unwrap();
    let claims = service.validate_token(&token).unwrap();

    assert_eq!(claims.sub, user.user_id);
    assert_eq!(claims.email, "it@test.com");
    assert_eq!(claims.role, UserRole::Teacher);
}

#[actix_web::test]
async fn test_tampered_token_is_rejected() {
    let service = jwt_service();
    let user = User::new("it@test.com", "Integration Test", UserRole::Student, "$x");

    let mut token = service.create_token(&user).unwrap();
    token.push('x');

    assert!(service.validate_token(&token).is_err());
}

#[actix_web::test]
async fn test_students_cannot_reach_teacher_operations() {
    let student = claims_for(UserRole::Student);

    for operation in [
        Operation::UploadMaterial,
        Operation::GenerateQuiz,
        Operation::RecordGrade,
        Operation::MarkAttendance,
    ] {
        assert!(authorize(&student, operation, None).is_err());
    }
}

#[actix_web::test]
async fn test_students_see_only_their_own_records() {
    let student = claims_for(UserRole::Student);

    assert!(authorize(&student, Operation::ViewGrades, Some(&student.sub)).is_ok());
    assert!(authorize(&student, Operation::ViewGrades, Some("someone-else")).is_err());

    // Teachers are not scoped to a single student.
    let teacher = claims_for(UserRole::Teacher);
    assert!(authorize(&teacher, Operation::ViewGrades, Some("someone-else")).is_ok());
}

#[cfg(test)]
mod sync_tests {
    use classpilot_server::models::domain::{User, UserRole};

    #[test]
    fn test_role_serialization_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Student).unwrap(),
            "\"student\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Teacher).unwrap(),
            "\"teacher\""
        );
    }

    #[test]
    fn test_user_roundtrips_through_json() {
        let user = User::new("round@test.com", "Round Trip", UserRole::Student, "$hash");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
