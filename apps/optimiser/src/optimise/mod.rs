// ATS optimisation: prompt construction, response splitting, and the HTTP
// handler that fronts the pipeline. The remote call itself lives in
// llm_client — no direct API calls here.

pub mod handlers;
pub mod prompts;
pub mod splitter;

pub use splitter::{split_response, OptimisationResult};
