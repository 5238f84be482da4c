pub mod attendance_repository;
pub mod blob_store;
pub mod grade_repository;
pub mod material_repository;
pub mod quiz_repository;
pub mod recommendation_repository;
pub mod summary_repository;
pub mod user_repository;

pub use attendance_repository::{AttendanceRepository, MongoAttendanceRepository};
pub use blob_store::{BlobStore, GridFsBlobStore};
pub use grade_repository::{GradeRepository, MongoGradeRepository};
pub use material_repository::{MaterialRepository, MongoMaterialRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use recommendation_repository::{MongoRecommendationRepository, RecommendationRepository};
pub use summary_repository::{MongoSummaryRepository, SummaryRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
