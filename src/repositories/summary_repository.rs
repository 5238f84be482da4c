use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Summary};

#[async_trait]
pub trait SummaryRepository: Send + Sync {
    async fn create(&self, summary: Summary) -> AppResult<Summary>;
    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Summary>>;
}

pub struct MongoSummaryRepository {
    collection: Collection<Summary>,
}

impl MongoSummaryRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("summaries");
        Self { collection }
    }
}

#[async_trait]
impl SummaryRepository for MongoSummaryRepository {
    async fn create(&self, summary: Summary) -> AppResult<Summary> {
        self.collection.insert_one(&summary).await?;
        Ok(summary)
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Summary>> {
        let cursor = self
            .collection
            .find(doc! { "student_id": student_id })
            .await?;
        let summaries: Vec<Summary> = cursor.try_collect().await?;
        Ok(summaries)
    }
}
