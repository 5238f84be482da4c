use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{request::GenerateQuizRequest, response::QuizResponse},
    },
    repositories::QuizRepository,
    services::{extract, llm::LlmClient, material_service::MaterialService},
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    material_service: Arc<MaterialService>,
    llm: Arc<dyn LlmClient>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        material_service: Arc<MaterialService>,
        llm: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            repository,
            material_service,
            llm,
        }
    }

    /// Generates a quiz from the first referenced material, or from a generic
    /// prompt when no material id is supplied. Real generations are persisted;
    /// degraded output is returned to the caller but never stored.
    pub async fn generate(
        &self,
        teacher_id: &str,
        request: GenerateQuizRequest,
    ) -> AppResult<QuizResponse> {
        request.validate()?;

        let material_id = request
            .material_ids
            .as_ref()
            .and_then(|ids| ids.first())
            .cloned();

        let material_text = match &material_id {
            Some(id) => {
                let (data, filename) = self.material_service.download(id).await?;
                extract::extract_text(&filename, &data)?
            }
            None => prompts::fallback_material(&request.subject, &request.level),
        };

        let prompt = prompts::quiz_prompt(
            &request.subject,
            &request.level,
            &material_text,
            request.num_questions,
        );

        let outcome = self.llm.complete(&prompt).await;
        if outcome.is_degraded() {
            log::warn!(
                "Quiz generation degraded for teacher {} on subject '{}'",
                teacher_id,
                request.subject
            );
            return Ok(QuizResponse {
                quiz_id: None,
                quiz: outcome.into_text(),
                degraded: true,
            });
        }

        let section = request.section.as_deref().unwrap_or("default");
        let quiz = Quiz::new(teacher_id, section, &request.subject, &outcome.into_text());
        let created = self.repository.create(quiz).await?;

        Ok(QuizResponse {
            quiz_id: Some(created.quiz_id),
            quiz: created.content,
            degraded: false,
        })
    }

    pub async fn get_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))
    }
}
