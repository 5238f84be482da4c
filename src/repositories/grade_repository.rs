use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_document},
    options::UpdateOptions,
    Collection,
};

use crate::{db::Database, errors::AppResult, models::domain::Grade};

#[async_trait]
pub trait GradeRepository: Send + Sync {
    /// Atomic update-or-insert on the (student_id, quiz_id) composite key.
    async fn upsert(&self, grade: Grade) -> AppResult<Grade>;
    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Grade>>;
}

pub struct MongoGradeRepository {
    collection: Collection<Grade>,
}

impl MongoGradeRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("grades");
        Self { collection }
    }
}

#[async_trait]
impl GradeRepository for MongoGradeRepository {
    async fn upsert(&self, grade: Grade) -> AppResult<Grade> {
        let filter = doc! {
            "student_id": &grade.student_id,
            "quiz_id": &grade.quiz_id,
        };
        let update = doc! { "$set": to_document(&grade)? };
        let options = UpdateOptions::builder().upsert(true).build();

        self.collection
            .update_one(filter, update)
            .with_options(options)
            .await?;

        Ok(grade)
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Grade>> {
        let cursor = self
            .collection
            .find(doc! { "student_id": student_id })
            .await?;
        let grades: Vec<Grade> = cursor.try_collect().await?;
        Ok(grades)
    }
}
