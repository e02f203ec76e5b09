//! Command-line front end: same pipeline as the HTTP API, with the job
//! description taken from a file or from stdin (terminated by a blank line).

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use optimiser::config::Config;
use optimiser::extract::SourceDocument;
use optimiser::llm_client::LlmClient;
use optimiser::pipeline;

#[derive(Parser)]
#[command(
    name = "optimiser",
    version,
    about = "Rewrites a resume for ATS systems against a target job description"
)]
struct Cli {
    /// Path to the resume file (PDF or DOCX)
    resume: PathBuf,

    /// Read the job description from this file instead of stdin
    #[arg(long)]
    job_file: Option<PathBuf>,

    /// Directory the output files are written into
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Directory holding times.ttf / timesbd.ttf (falls back to builtin
    /// faces when unset or missing)
    #[arg(long, env = "FONT_DIR")]
    font_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let document = SourceDocument::from_path(&cli.resume)
        .with_context(|| format!("failed to load {}", cli.resume.display()))?;

    let job_description = match &cli.job_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => read_job_description_from_stdin()?,
    };

    let service = LlmClient::new(config.cohere_api_key.clone());
    let font_dir = cli.font_dir.or(config.font_dir);

    println!("Optimising resume for ATS & readability... please wait");
    let outcome = pipeline::run(
        &service,
        document,
        &job_description,
        &cli.out_dir,
        font_dir.as_deref(),
    )
    .await?;

    println!("✓ Optimised resume saved as {}", outcome.resume_txt.display());
    if let Some(explanation) = &outcome.explanation_txt {
        println!("✓ ATS explanation saved as {}", explanation.display());
    }
    println!("✓ ATS-friendly PDF saved as {}", outcome.resume_pdf.display());

    Ok(())
}

/// Reads stdin line by line until the first blank line.
fn read_job_description_from_stdin() -> Result<String> {
    println!("Paste the target job description below (end with a blank line):");
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
