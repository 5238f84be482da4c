use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Material};

#[async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn create(&self, material: Material) -> AppResult<Material>;
    async fn find_by_id(&self, material_id: &str) -> AppResult<Option<Material>>;
    async fn find_by_section(&self, section: &str) -> AppResult<Vec<Material>>;
    async fn find_by_teacher(&self, teacher_id: &str) -> AppResult<Vec<Material>>;
}

pub struct MongoMaterialRepository {
    collection: Collection<Material>,
}

impl MongoMaterialRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("materials");
        Self { collection }
    }
}

#[async_trait]
impl MaterialRepository for MongoMaterialRepository {
    async fn create(&self, material: Material) -> AppResult<Material> {
        self.collection.insert_one(&material).await?;
        Ok(material)
    }

    async fn find_by_id(&self, material_id: &str) -> AppResult<Option<Material>> {
        let material = self
            .collection
            .find_one(doc! { "material_id": material_id })
            .await?;
        Ok(material)
    }

    async fn find_by_section(&self, section: &str) -> AppResult<Vec<Material>> {
        let cursor = self.collection.find(doc! { "section": section }).await?;
        let materials: Vec<Material> = cursor.try_collect().await?;
        Ok(materials)
    }

    async fn find_by_teacher(&self, teacher_id: &str) -> AppResult<Vec<Material>> {
        let cursor = self
            .collection
            .find(doc! { "teacher_id": teacher_id })
            .await?;
        let materials: Vec<Material> = cursor.try_collect().await?;
        Ok(materials)
    }
}
