//! Download routes for the three pipeline artifacts. Names are
//! allow-listed — there is no general file-serving surface here.

use axum::{
    extract::{Path as AxumPath, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::pipeline::{EXPLANATION_TXT, RESUME_PDF, RESUME_TXT};
use crate::state::AppState;

const ALLOWED: [&str; 3] = [RESUME_TXT, EXPLANATION_TXT, RESUME_PDF];

/// GET /api/v1/files/:name
pub async fn handle_download(
    State(state): State<AppState>,
    AxumPath(name): AxumPath<String>,
) -> Result<Response, AppError> {
    if !ALLOWED.contains(&name.as_str()) {
        return Err(AppError::NotFound(format!("{name} is not an output file")));
    }

    let path = state.config.output_dir.join(&name);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("{name} has not been produced yet")))?;

    let content_type = if name.ends_with(".pdf") {
        "application/pdf"
    } else {
        "text/plain; charset=utf-8"
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
