use async_trait::async_trait;
use futures::{AsyncReadExt, AsyncWriteExt};
use mongodb::bson::{oid::ObjectId, Bson};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
};

/// Opaque-reference binary storage for uploaded files.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `data` and returns the reference to fetch it back.
    async fn put(&self, filename: &str, data: &[u8]) -> AppResult<String>;
    /// Fetches the bytes stored under `blob_ref`.
    async fn get(&self, blob_ref: &str) -> AppResult<Vec<u8>>;
}

/// GridFS-backed blob store; references are ObjectId hex strings.
pub struct GridFsBlobStore {
    db: Database,
}

impl GridFsBlobStore {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl BlobStore for GridFsBlobStore {
    async fn put(&self, filename: &str, data: &[u8]) -> AppResult<String> {
        let bucket = self.db.gridfs_bucket();
        let mut upload_stream = bucket.open_upload_stream(filename).await?;

        upload_stream
            .write_all(data)
            .await
            .map_err(|e| AppError::Database(format!("GridFS write failed: {}", e)))?;
        upload_stream
            .close()
            .await
            .map_err(|e| AppError::Database(format!("GridFS close failed: {}", e)))?;

        match upload_stream.id() {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Ok(other.to_string()),
        }
    }

    async fn get(&self, blob_ref: &str) -> AppResult<Vec<u8>> {
        let oid = ObjectId::parse_str(blob_ref)
            .map_err(|_| AppError::NotFound(format!("Invalid blob reference '{}'", blob_ref)))?;

        let bucket = self.db.gridfs_bucket();
        let mut download_stream = bucket
            .open_download_stream(Bson::ObjectId(oid))
            .await
            .map_err(|_| AppError::NotFound(format!("Blob '{}' not found", blob_ref)))?;

        let mut data = Vec::new();
        download_stream
            .read_to_end(&mut data)
            .await
            .map_err(|e| AppError::Database(format!("GridFS read failed: {}", e)))?;

        Ok(data)
    }
}
