pub mod extract;
pub mod llm;
pub mod material_service;
pub mod monitoring_service;
pub mod quiz_service;
pub mod summary_service;
pub mod user_service;

pub use llm::{LlmClient, LlmOutcome, OpenAiLlmClient};
pub use material_service::MaterialService;
pub use monitoring_service::MonitoringService;
pub use quiz_service::QuizService;
pub use summary_service::SummaryService;
pub use user_service::UserService;
