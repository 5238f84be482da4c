use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::{domain::Summary, dto::response::SummaryResponse},
    repositories::SummaryRepository,
    services::{extract, llm::LlmClient},
};

pub struct SummaryService {
    repository: Arc<dyn SummaryRepository>,
    llm: Arc<dyn LlmClient>,
}

impl SummaryService {
    pub fn new(repository: Arc<dyn SummaryRepository>, llm: Arc<dyn LlmClient>) -> Self {
        Self { repository, llm }
    }

    /// Summarizes lecture content supplied as raw text or as an uploaded file
    /// (file wins when both are present). Persists the summary unless the LLM
    /// call came back degraded.
    pub async fn summarize(
        &self,
        student_id: &str,
        subject: &str,
        lecture_number: i32,
        lecture_text: Option<String>,
        file: Option<(String, Vec<u8>)>,
    ) -> AppResult<SummaryResponse> {
        let content = match (file, lecture_text) {
            (Some((filename, data)), _) => extract::extract_text(&filename, &data)
                .map_err(|e| AppError::NoContent(e.to_string()))?,
            (None, Some(text)) if !text.trim().is_empty() => text,
            _ => {
                return Err(AppError::NoContent(
                    "Either lecture text or a file is required".to_string(),
                ));
            }
        };

        let prompt = prompts::summary_prompt(subject, lecture_number, &content);
        let outcome = self.llm.complete(&prompt).await;

        if outcome.is_degraded() {
            log::warn!(
                "Summarization degraded for student {} on subject '{}'",
                student_id,
                subject
            );
            return Ok(SummaryResponse {
                summary_id: None,
                subject: subject.to_string(),
                lecture_number,
                summary: outcome.into_text(),
                degraded: true,
            });
        }

        let summary = Summary::new(student_id, subject, lecture_number, &outcome.into_text());
        let created = self.repository.create(summary).await?;

        Ok(SummaryResponse {
            summary_id: Some(created.summary_id),
            subject: created.subject,
            lecture_number: created.lecture_number,
            summary: created.summary,
            degraded: false,
        })
    }

    pub async fn list_by_student(&self, student_id: &str) -> AppResult<Vec<Summary>> {
        self.repository.find_by_student(student_id).await
    }
}
