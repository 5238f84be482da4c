use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpResponse};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::{
    app_state::AppState,
    auth::{authorize, AuthenticatedUser, Operation},
    errors::AppError,
    models::dto::{
        request::UploadMaterialForm,
        response::{MaterialInfoResponse, UploadMaterialResponse},
    },
};

/// Builds the download response shared by the materials and student routes.
pub(crate) fn file_response(data: Vec<u8>, filename: &str) -> HttpResponse {
    let encoded = utf8_percent_encode(filename, NON_ALPHANUMERIC).to_string();

    HttpResponse::Ok()
        .content_type("application/octet-stream")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename*=UTF-8''{}", encoded),
        ))
        .body(data)
}

#[post("/materials/upload")]
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

#[get("/materials/download/{material_id}")]
pub async fn download_material(
    state: web::Data<AppState>,
    material_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (data, filename) = state.material_service.download(&material_id).await?;
    Ok(file_response(data, &filename))
}

#[get("/materials/list/{section}")]
pub async fn list_materials(
    state: web::Data<AppState>,
    section: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let materials = state.material_service.list_by_section(&section).await?;
    let materials: Vec<MaterialInfoResponse> =
        materials.into_iter().map(MaterialInfoResponse::from).collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "section": section.into_inner(),
        "requested_by": auth.0.email,
        "materials": materials,
    })))
}

#[get("/materials/info/{material_id}")]
pub async fn material_info(
    state: web::Data<AppState>,
    material_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let info = state.material_service.info(&material_id).await?;
    Ok(HttpResponse::Ok().json(info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_response_percent_encodes_filename() {
        let resp = file_response(vec![1, 2, 3], "lecture notes (v2).pdf");
        let header = resp
            .headers()
            .get("Content-Disposition")
            .unwrap()
            .to_str()
            .unwrap();

        assert!(header.starts_with("attachment; filename*=UTF-8''"));
        assert!(header.contains("lecture%20notes%20%28v2%29%2Epdf"));
    }
}
