//! ATS resume optimiser: extracts text from a PDF/DOCX resume, asks a hosted
//! LLM to rewrite it for a target job description, and renders the result as
//! a paginated PDF.
//!
//! The library exposes the full pipeline; `src/main.rs` (HTTP API) and
//! `src/bin/cli.rs` are thin front ends over [`pipeline::run`].

pub mod config;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod optimise;
pub mod pipeline;
pub mod render;
pub mod routes;
pub mod state;
