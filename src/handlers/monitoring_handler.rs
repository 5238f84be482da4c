use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{authorize, AuthenticatedUser, Operation},
    errors::AppError,
    models::dto::request::{MarkAttendanceRequest, RecordGradeRequest},
};

#[post("/monitoring/grades/{student_id}")]
pub async fn record_grade(
    state: web::Data<AppState>,
    student_id: web::Path<String>,
    request: web::Json<RecordGradeRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::RecordGrade, None)?;

    let grade = state
        .monitoring_service
        .record_grade(&auth.0.sub, &student_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(grade))
}

#[get("/monitoring/grades/{student_id}")]
pub async fn student_grades(
    state: web::Data<AppState>,
    student_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ViewGrades, Some(&student_id))?;

    let grades = state.monitoring_service.student_grades(&student_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "student_id": student_id.into_inner(),
        "grades": grades,
    })))
}

#[post("/monitoring/attendance/{student_id}")]
pub async fn mark_attendance(
    state: web::Data<AppState>,
    student_id: web::Path<String>,
    request: web::Json<MarkAttendanceRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::MarkAttendance, None)?;

    let record = state
        .monitoring_service
        .mark_attendance(&auth.0.sub, &student_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(record))
}

#[get("/monitoring/attendance/{student_id}")]
pub async fn student_attendance(
    state: web::Data<AppState>,
    student_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ViewAttendance, Some(&student_id))?;

    let records = state
        .monitoring_service
        .student_attendance(&student_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "student_id": student_id.into_inner(),
        "attendance": records,
    })))
}

#[get("/monitoring/attendance-stats/{student_id}")]
pub async fn attendance_stats(
    state: web::Data<AppState>,
    student_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ViewAttendanceStats, Some(&student_id))?;

    let stats = state
        .monitoring_service
        .attendance_stats(&student_id)
        .await?;

    Ok(HttpResponse::Ok().json(stats))
}

#[get("/monitoring/recommendations/{student_id}")]
pub async fn recommendations(
    state: web::Data<AppState>,
    student_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ViewRecommendations, Some(&student_id))?;

    let recommendation = state
        .monitoring_service
        .generate_recommendations(&student_id)
        .await?;

    Ok(HttpResponse::Ok().json(recommendation))
}

#[get("/monitoring/recommendations/{student_id}/latest")]
pub async fn latest_recommendation(
    state: web::Data<AppState>,
    student_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ViewRecommendations, Some(&student_id))?;

    let recommendation = state
        .monitoring_service
        .latest_recommendation(&student_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No recommendations for student {}", student_id))
        })?;

    Ok(HttpResponse::Ok().json(recommendation))
}

#[get("/monitoring/my-grades")]
pub async fn my_grades(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ViewGrades, Some(&auth.0.sub))?;

    let grades = state.monitoring_service.student_grades(&auth.0.sub).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "student_id": auth.0.sub,
        "grades": grades,
    })))
}

#[get("/monitoring/my-attendance")]
pub async fn my_attendance(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ViewAttendance, Some(&auth.0.sub))?;

    let records = state
        .monitoring_service
        .student_attendance(&auth.0.sub)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "student_id": auth.0.sub,
        "attendance": records,
    })))
}
