//! The orchestrator: extract → prompt → remote optimisation → split →
//! write text artifacts → render PDF. Both front ends call [`run`].
//!
//! Fully sequential. If the remote call fails, no files are written —
//! earlier runs' outputs are left untouched.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, SourceDocument};
use crate::llm_client::OptimiseService;
use crate::optimise::prompts::build_prompt;
use crate::optimise::split_response;
use crate::render::layout::{layout, PageGeometry};
use crate::render::pdf::write_pdf;

pub const RESUME_TXT: &str = "optimised_resume.txt";
pub const EXPLANATION_TXT: &str = "ats_explanation.txt";
pub const RESUME_PDF: &str = "optimised_resume.pdf";

/// Everything a front end needs to display and offer for download.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub optimised_resume: String,
    pub explanation: String,
    pub resume_txt: PathBuf,
    /// Only written when the model produced an explanation section.
    pub explanation_txt: Option<PathBuf>,
    pub resume_pdf: PathBuf,
}

/// Runs the whole optimisation pipeline for one resume + job description.
pub async fn run(
    service: &dyn OptimiseService,
    document: SourceDocument,
    job_description: &str,
    out_dir: &Path,
    font_dir: Option<&Path>,
) -> Result<PipelineOutcome, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job description cannot be empty".to_string(),
        ));
    }

    let resume_text = extract_text(&document)?;
    if resume_text.is_empty() {
        return Err(AppError::Extraction(
            "the resume contained no extractable text".to_string(),
        ));
    }
    info!("Extracted {} characters of resume text", resume_text.len());

    let prompt = build_prompt(&resume_text, job_description);
    let raw = service.optimise(&prompt).await?;
    let result = split_response(&raw);
    info!(
        "Optimisation response split: {} resume chars, {} explanation chars",
        result.optimised_resume.len(),
        result.explanation.len()
    );

    std::fs::create_dir_all(out_dir)?;

    let resume_txt = out_dir.join(RESUME_TXT);
    std::fs::write(&resume_txt, &result.optimised_resume)?;

    let explanation_txt = if result.explanation.is_empty() {
        None
    } else {
        let path = out_dir.join(EXPLANATION_TXT);
        std::fs::write(&path, &result.explanation)?;
        Some(path)
    };

    let rendered = layout(&result.optimised_resume, PageGeometry::a4());
    let resume_pdf = out_dir.join(RESUME_PDF);
    write_pdf(&rendered, &resume_pdf, font_dir)?;
    info!(
        "Wrote {} page(s) to {}",
        rendered.pages.len(),
        resume_pdf.display()
    );

    Ok(PipelineOutcome {
        optimised_resume: result.optimised_resume,
        explanation: result.explanation,
        resume_txt,
        explanation_txt,
        resume_pdf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::SourceFormat;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use docx_rs::{Docx, Paragraph, Run};

    struct FakeService {
        response: String,
    }

    #[async_trait]
    impl OptimiseService for FakeService {
        async fn optimise(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.response.clone())
        }
    }

    struct FailingService;

    #[async_trait]
    impl OptimiseService for FailingService {
        async fn optimise(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn docx_document(paragraphs: &[&str]) -> SourceDocument {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).expect("pack docx");
        SourceDocument {
            bytes: buf.into_inner(),
            format: SourceFormat::Docx,
        }
    }

    #[tokio::test]
    async fn test_pipeline_writes_all_three_artifacts() {
        let out = tempfile::tempdir().unwrap();
        let service = FakeService {
            response: "===OPTIMISED RESUME===\nJANE DOE\nEngineer\n===EXPLANATION===\nAdded keywords."
                .to_string(),
        };
        let document = docx_document(&["Jane Doe", "Engineer at Example"]);

        let outcome = run(&service, document, "Rust developer role", out.path(), None)
            .await
            .unwrap();

        assert_eq!(outcome.optimised_resume, "JANE DOE\nEngineer");
        assert_eq!(outcome.explanation, "Added keywords.");
        assert_eq!(
            std::fs::read_to_string(&outcome.resume_txt).unwrap(),
            "JANE DOE\nEngineer"
        );
        let explanation_txt = outcome.explanation_txt.expect("explanation file");
        assert_eq!(
            std::fs::read_to_string(explanation_txt).unwrap(),
            "Added keywords."
        );
        assert!(outcome.resume_pdf.exists());
    }

    #[tokio::test]
    async fn test_pipeline_skips_explanation_file_when_absent() {
        let out = tempfile::tempdir().unwrap();
        let service = FakeService {
            response: "JANE DOE\nEngineer, no markers here".to_string(),
        };
        let document = docx_document(&["Jane Doe"]);

        let outcome = run(&service, document, "Any role", out.path(), None)
            .await
            .unwrap();

        assert!(outcome.explanation_txt.is_none());
        assert!(!out.path().join(EXPLANATION_TXT).exists());
        assert!(outcome.resume_txt.exists());
        assert!(outcome.resume_pdf.exists());
    }

    #[tokio::test]
    async fn test_pipeline_writes_nothing_when_service_fails() {
        let out = tempfile::tempdir().unwrap();
        let document = docx_document(&["Jane Doe"]);

        let err = run(&FailingService, document, "Any role", out.path(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Service(_)));
        assert!(!out.path().join(RESUME_TXT).exists());
        assert!(!out.path().join(RESUME_PDF).exists());
    }

    #[tokio::test]
    async fn test_pipeline_rejects_empty_job_description() {
        let out = tempfile::tempdir().unwrap();
        let document = docx_document(&["Jane Doe"]);

        let err = run(&FailingService, document, "   \n", out.path(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
