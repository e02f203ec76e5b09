//! Axum route handler for the optimisation pipeline.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::SourceDocument;
use crate::pipeline;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OptimiseResponse {
    pub optimised_resume: String,
    pub explanation: String,
    /// Artifact names servable from /api/v1/files/:name.
    pub files: Vec<String>,
}

/// POST /api/v1/optimise
///
/// Multipart form: `resume` (PDF or DOCX file part) + `job_description`
/// (text part). Runs the full pipeline and returns both text panels plus
/// the downloadable artifact names.
pub async fn handle_optimise(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OptimiseResponse>, AppError> {
    let mut document: Option<SourceDocument> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                document = Some(SourceDocument::from_upload(&file_name, bytes.to_vec())?);
            }
            "job_description" => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read field: {e}")))?;
            }
            _ => {}
        }
    }

    let document =
        document.ok_or_else(|| AppError::Validation("resume file part is required".to_string()))?;
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let outcome = pipeline::run(
        state.service.as_ref(),
        document,
        &job_description,
        &state.config.output_dir,
        state.config.font_dir.as_deref(),
    )
    .await?;

    let mut files = vec![
        pipeline::RESUME_TXT.to_string(),
        pipeline::RESUME_PDF.to_string(),
    ];
    if outcome.explanation_txt.is_some() {
        files.push(pipeline::EXPLANATION_TXT.to_string());
    }

    Ok(Json(OptimiseResponse {
        optimised_resume: outcome.optimised_resume,
        explanation: outcome.explanation,
        files,
    }))
}
