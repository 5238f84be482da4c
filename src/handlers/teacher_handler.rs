use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{authorize, AuthenticatedUser, Operation},
    errors::AppError,
    models::dto::{
        request::{GenerateQuizRequest, UploadMaterialForm},
        response::{MaterialInfoResponse, UploadMaterialResponse},
    },
};

#[post("/api/teacher/upload-material")]
pub async fn upload_material(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<UploadMaterialForm>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::UploadMaterial, None)?;

    let filename = form
        .file
        .file_name
        .clone()
        .ok_or_else(|| AppError::Validation("Uploaded file must have a filename".to_string()))?;

    log::info!("Teacher {} uploading material '{}'", auth.0.sub, filename);

    let material = state
        .material_service
        .upload(
            &form.file.data,
            &filename,
            &auth.0.sub,
            form.section.as_str(),
            form.subject.map(|t| t.into_inner()),
        )
        .await?;

    Ok(HttpResponse::Created().json(UploadMaterialResponse {
        status: "success".to_string(),
        material_id: material.material_id,
        filename: material.filename,
    }))
}

#[post("/api/teacher/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::GenerateQuiz, None)?;

    let response = state
        .quiz_service
        .generate(&auth.0.sub, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/teacher/my-materials")]
pub async fn my_materials(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    authorize(&auth.0, Operation::ListOwnMaterials, None)?;

    let materials = state.material_service.list_by_teacher(&auth.0.sub).await?;
    let materials: Vec<MaterialInfoResponse> =
        materials.into_iter().map(MaterialInfoResponse::from).collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "teacher_id": auth.0.sub,
        "materials": materials,
    })))
}

#[get("/api/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}
