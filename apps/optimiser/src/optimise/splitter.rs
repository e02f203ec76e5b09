//! Splits the raw model response into the optimised resume and the
//! explanation, using the literal section markers the prompt mandates.
//!
//! First-occurrence split only — markers appearing out of order or more than
//! once get no special recovery.

use serde::Serialize;

pub const RESUME_MARKER: &str = "===OPTIMISED RESUME===";
pub const EXPLANATION_MARKER: &str = "===EXPLANATION===";

/// The two sections of a split response. `explanation` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimisationResult {
    pub optimised_resume: String,
    pub explanation: String,
}

/// Splits a raw response on the literal markers.
///
/// No resume marker → the whole response is the resume and the explanation
/// is empty. Otherwise the resume is everything after the resume marker up
/// to the explanation marker (or end of string), and the explanation is
/// everything after the first explanation marker in the full response.
pub fn split_response(raw: &str) -> OptimisationResult {
    let Some(idx) = raw.find(RESUME_MARKER) else {
        return OptimisationResult {
            optimised_resume: raw.trim().to_string(),
            explanation: String::new(),
        };
    };

    let tail = &raw[idx + RESUME_MARKER.len()..];
    let resume = match tail.find(EXPLANATION_MARKER) {
        Some(end) => &tail[..end],
        None => tail,
    };
    let explanation = raw
        .find(EXPLANATION_MARKER)
        .map(|e| raw[e + EXPLANATION_MARKER.len()..].trim().to_string())
        .unwrap_or_default();

    OptimisationResult {
        optimised_resume: resume.trim().to_string(),
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_both_markers() {
        let raw = "blah ===OPTIMISED RESUME=== RESUME_TEXT ===EXPLANATION=== EXP_TEXT";
        let result = split_response(raw);
        assert_eq!(result.optimised_resume, "RESUME_TEXT");
        assert_eq!(result.explanation, "EXP_TEXT");
    }

    #[test]
    fn test_split_without_markers_whole_response_is_resume() {
        let result = split_response("  plain rewrite with no markers  ");
        assert_eq!(result.optimised_resume, "plain rewrite with no markers");
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn test_split_with_resume_marker_only() {
        let raw = "preamble ===OPTIMISED RESUME===\nJANE DOE\nEngineer";
        let result = split_response(raw);
        assert_eq!(result.optimised_resume, "JANE DOE\nEngineer");
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn test_split_uses_first_occurrence_of_each_marker() {
        let raw = "===OPTIMISED RESUME=== A ===EXPLANATION=== B ===EXPLANATION=== C";
        let result = split_response(raw);
        assert_eq!(result.optimised_resume, "A");
        assert_eq!(result.explanation, "B ===EXPLANATION=== C");
    }

    #[test]
    fn test_split_sections_are_trimmed() {
        let raw = "===OPTIMISED RESUME===\n\n  body  \n\n===EXPLANATION===\n\n  why  \n";
        let result = split_response(raw);
        assert_eq!(result.optimised_resume, "body");
        assert_eq!(result.explanation, "why");
    }
}
