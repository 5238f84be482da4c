use async_trait::async_trait;
use mongodb::{bson::doc, options::FindOneOptions, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Recommendation};

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Snapshots are append-only; older ones are kept in storage.
    async fn create(&self, recommendation: Recommendation) -> AppResult<Recommendation>;
    /// Returns only the newest snapshot for the student.
    async fn find_latest(&self, student_id: &str) -> AppResult<Option<Recommendation>>;
}

pub struct MongoRecommendationRepository {
    collection: Collection<Recommendation>,
}

impl MongoRecommendationRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("recommendations");
        Self { collection }
    }
}

#[async_trait]
impl RecommendationRepository for MongoRecommendationRepository {
    async fn create(&self, recommendation: Recommendation) -> AppResult<Recommendation> {
        self.collection.insert_one(&recommendation).await?;
        Ok(recommendation)
    }

    async fn find_latest(&self, student_id: &str) -> AppResult<Option<Recommendation>> {
        let options = FindOneOptions::builder()
            .sort(doc! { "generated_at": -1 })
            .build();

        let recommendation = self
            .collection
            .find_one(doc! { "student_id": student_id })
            .with_options(options)
            .await?;

        Ok(recommendation)
    }
}
