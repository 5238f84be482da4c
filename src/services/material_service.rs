use std::sync::Arc;

use crate::{
    constants::{self, ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES},
    errors::{AppError, AppResult},
    models::{domain::Material, dto::response::MaterialInfoResponse},
    repositories::{BlobStore, MaterialRepository},
};

pub struct MaterialService {
    repository: Arc<dyn MaterialRepository>,
    blob_store: Arc<dyn BlobStore>,
}

impl MaterialService {
    pub fn new(repository: Arc<dyn MaterialRepository>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self {
            repository,
            blob_store,
        }
    }

    /// Validates format and size, stores the bytes in the blob store and the
    /// metadata in the materials collection. Returns the new material.
    pub async fn upload(
        &self,
        data: &[u8],
        filename: &str,
        teacher_id: &str,
        section: &str,
        subject: Option<String>,
    ) -> AppResult<Material> {
        let extension = constants::file_extension(filename)
            .ok_or_else(|| AppError::UnsupportedFormat(filename.to_string()))?;
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::UnsupportedFormat(extension));
        }

        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::PayloadTooLarge {
                size: data.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let file_id = self.blob_store.put(filename, data).await?;
        let material = Material::new(
            &file_id,
            teacher_id,
            section,
            subject,
            filename,
            data.len() as u64,
        );

        let created = self.repository.create(material).await?;
        log::info!(
            "Stored material '{}' ({} bytes) as {}",
            created.filename,
            created.file_size,
            created.material_id
        );

        Ok(created)
    }

    /// Returns the stored bytes and original filename.
    pub async fn download(&self, material_id: &str) -> AppResult<(Vec<u8>, String)> {
        let material = self.get_material(material_id).await?;
        let data = self.blob_store.get(&material.file_id).await?;
        Ok((data, material.filename))
    }

    pub async fn list_by_section(&self, section: &str) -> AppResult<Vec<Material>> {
        self.repository.find_by_section(section).await
    }

    pub async fn list_by_teacher(&self, teacher_id: &str) -> AppResult<Vec<Material>> {
        self.repository.find_by_teacher(teacher_id).await
    }

    /// Metadata-only view; the blob reference never leaves the service.
    pub async fn info(&self, material_id: &str) -> AppResult<MaterialInfoResponse> {
        let material = self.get_material(material_id).await?;
        Ok(MaterialInfoResponse::from(material))
    }

    pub(crate) async fn get_material(&self, material_id: &str) -> AppResult<Material> {
        self.repository
            .find_by_id(material_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Material with id '{}' not found", material_id))
            })
    }
}
