use std::sync::Arc;

use crate::{
    auth::jwt::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        GridFsBlobStore, MongoAttendanceRepository, MongoGradeRepository,
        MongoMaterialRepository, MongoQuizRepository, MongoRecommendationRepository,
        MongoSummaryRepository, MongoUserRepository,
    },
    services::{
        llm::OpenAiLlmClient, MaterialService, MonitoringService, QuizService, SummaryService,
        UserService,
    },
};

/// Everything the handlers need, wired once at startup and shared via
/// `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub material_service: Arc<MaterialService>,
    pub quiz_service: Arc<QuizService>,
    pub summary_service: Arc<SummaryService>,
    pub monitoring_service: Arc<MonitoringService>,
    pub jwt_service: Arc<JwtService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = MongoUserRepository::new(&db);
        user_repository.ensure_indexes().await?;
        let user_repository = Arc::new(user_repository);

        let material_repository = Arc::new(MongoMaterialRepository::new(&db));
        let blob_store = Arc::new(GridFsBlobStore::new(&db));
        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        let summary_repository = Arc::new(MongoSummaryRepository::new(&db));
        let grade_repository = Arc::new(MongoGradeRepository::new(&db));
        let attendance_repository = Arc::new(MongoAttendanceRepository::new(&db));
        let recommendation_repository = Arc::new(MongoRecommendationRepository::new(&db));

        let llm = Arc::new(OpenAiLlmClient::new(&config));

        let user_service = Arc::new(UserService::new(user_repository));
        let material_service = Arc::new(MaterialService::new(material_repository, blob_store));
        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            Arc::clone(&material_service),
            llm.clone(),
        ));
        let summary_service = Arc::new(SummaryService::new(summary_repository, llm));
        let monitoring_service = Arc::new(MonitoringService::new(
            grade_repository,
            attendance_repository,
            recommendation_repository,
        ));

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_minutes,
        ));

        Ok(Self {
            user_service,
            material_service,
            quiz_service,
            summary_service,
            monitoring_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}
