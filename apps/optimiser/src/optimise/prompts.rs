// The fixed optimisation prompt. Replace `{resume_text}` and
// `{job_description}` before sending.

/// Instruction template sent with every optimisation request. The two-marker
/// output format is what `splitter` relies on.
pub const OPTIMISE_PROMPT_TEMPLATE: &str = r#"You are an ATS optimisation expert and professional resume writer.
Your task:
1. Optimise the given resume so it scores very high on ATS systems for the provided job description.
2. Maintain very high readability for human reviewers.
3. Use strong action verbs, measurable achievements, and relevant industry keywords.
4. Keep formatting ATS-safe (plain text, no tables/images).
5. Section headings must be in ALL CAPS (e.g., "PROFESSIONAL EXPERIENCE").
6. Use bullet points where possible for experience and skills.
7. Do not use symbols like ** for bold — just plain text.
8. Keep the structure: Contact Info → Summary → Skills → Experience → Education → Certifications (if any).

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Return your answer in the following format:

===OPTIMISED RESUME===
<resume_here>

===EXPLANATION===
<explanation_here>"#;

/// Embeds both inputs verbatim into the fixed template. Pure string
/// construction — callers are expected to have validated non-emptiness.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    OPTIMISE_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
