/// LLM Client — the single point of entry for the remote optimisation call.
///
/// ARCHITECTURAL RULE: no other module may call the Cohere API directly.
/// Everything goes through [`OptimiseService`], so tests and front ends can
/// substitute a fake service without touching the pipeline.
///
/// Model: command-r-plus (hardcoded — the rewrite style depends on it)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const COHERE_API_URL: &str = "https://api.cohere.com/v1/chat";
/// The model used for every optimisation call.
pub const MODEL: &str = "command-r-plus";
/// Low temperature keeps the rewrite style deterministic across runs.
pub const TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct CohereRequest<'a> {
    model: &'a str,
    message: &'a str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CohereResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct CohereError {
    message: String,
}

/// The seam between the pipeline and the remote text-generation service.
/// Implemented by [`LlmClient`] in production and by fakes in tests.
#[async_trait]
pub trait OptimiseService: Send + Sync {
    /// Sends the prompt and returns the raw, trimmed response text.
    async fn optimise(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Cohere chat client. One synchronous-in-spirit request per run; the call
/// blocks the pipeline until it returns or errors. No retries — a failed
/// call aborts the run before any output file is written.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl OptimiseService for LlmClient {
    async fn optimise(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = CohereRequest {
            model: MODEL,
            message: prompt,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(COHERE_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<CohereError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: CohereResponse = response.json().await?;
        let text = payload.text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("LLM call succeeded: {} response chars", text.len());

        Ok(text.to_string())
    }
}
