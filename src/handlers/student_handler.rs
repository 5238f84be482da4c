use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{authorize, AuthenticatedUser, Operation},
    errors::AppError,
    handlers::material_handler::file_response,
    models::dto::{request::SummarizeForm, response::StudentMaterialResponse},
};

#[post("/api/student/summarize")]
pub async fn summarize(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<SummarizeForm>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::Summarize, None)?;

    let file = form.file.and_then(|bytes| {
        bytes
            .file_name
            .clone()
            .map(|name| (name, bytes.data.to_vec()))
    });

    let response = state
        .summary_service
        .summarize(
            &auth.0.sub,
            form.subject.as_str(),
            form.lecture_number.into_inner(),
            form.lecture_text.map(|t| t.into_inner()),
            file,
        )
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/student/my-summaries")]
pub async fn my_summaries(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ViewOwnSummaries, None)?;

    let summaries = state.summary_service.list_by_student(&auth.0.sub).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "student_id": auth.0.sub,
        "summaries": summaries,
    })))
}

#[get("/api/student/materials/{section}")]
pub async fn section_materials(
    state: web::Data<AppState>,
    section: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let materials = state.material_service.list_by_section(&section).await?;
    let materials: Vec<StudentMaterialResponse> = materials
        .into_iter()
        .map(StudentMaterialResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "section": section.into_inner(),
        "materials": materials,
    })))
}

#[get("/api/student/materials/download/{material_id}")]
pub async fn download_material(
    state: web::Data<AppState>,
    material_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (data, filename) = state.material_service.download(&material_id).await?;
    Ok(file_response(data, &filename))
}
