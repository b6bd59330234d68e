// Prompt constants for model-backed skill extraction.

/// Maximum number of document characters sent to the model.
pub const MAX_PROMPT_CHARS: usize = 15_000;

/// Skill extraction prompt template. Replace `{resume_text}` before sending.
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"You are an extractor. Given the resume text below, return ONLY a single JSON object:

{"skills": [<list of canonical short skill strings>]}

Rules:
- Return skill tokens like "python", "c++", "embedded linux", "device tree", "u-boot", "yocto", "i2c", "spi", "git".
- Normalize common variants (react.js -> react, node js -> node.js, powerbi -> power bi).
- Deduplicate and return only skills actually mentioned in the resume.
- Do NOT include company names, addresses, or long descriptive sentences.
- Output EXACTLY one JSON object and nothing else.

Resume:
"""{resume_text}""""#;

/// Builds the extraction prompt, truncating the text to `MAX_PROMPT_CHARS` characters.
pub fn build_skills_prompt(text: &str) -> String {
    let truncated: String = text.chars().take(MAX_PROMPT_CHARS).collect();
    SKILLS_PROMPT_TEMPLATE.replace("{resume_text}", &truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = build_skills_prompt("Rust and Go");
        assert!(prompt.contains("\"\"\"Rust and Go\"\"\""));
        assert!(prompt.contains(r#"{"skills""#));
    }

    #[test]
    fn test_prompt_truncates_long_text() {
        let long = "é".repeat(MAX_PROMPT_CHARS + 500);
        let prompt = build_skills_prompt(&long);
        assert_eq!(prompt.matches('é').count(), MAX_PROMPT_CHARS);
    }
}
