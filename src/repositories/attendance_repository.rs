use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_document},
    options::UpdateOptions,
    Collection,
};

use crate::{db::Database, errors::AppResult, models::domain::AttendanceRecord};

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Atomic update-or-insert on the (student_id, date) composite key.
    async fn upsert(&self, record: AttendanceRecord) -> AppResult<AttendanceRecord>;
    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<AttendanceRecord>>;
}

pub struct MongoAttendanceRepository {
    collection: Collection<AttendanceRecord>,
}

impl MongoAttendanceRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("attendance");
        Self { collection }
    }
}

#[async_trait]
impl AttendanceRepository for MongoAttendanceRepository {
    async fn upsert(&self, record: AttendanceRecord) -> AppResult<AttendanceRecord> {
        let filter = doc! {
            "student_id": &record.student_id,
            "date": &record.date,
        };
        let update = doc! { "$set": to_document(&record)? };
        let options = UpdateOptions::builder().upsert(true).build();

        self.collection
            .update_one(filter, update)
            .with_options(options)
            .await?;

        Ok(record)
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<AttendanceRecord>> {
        let cursor = self
            .collection
            .find(doc! { "student_id": student_id })
            .await?;
        let records: Vec<AttendanceRecord> = cursor.try_collect().await?;
        Ok(records)
    }
}
