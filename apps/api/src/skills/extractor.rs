//! Skill-set extractor: turns one document's text into a `SkillProfile`.
//!
//! Pipeline: candidate tokens (model source, or keyword scan fallback) → normalize →
//! drop empties → dedupe → table re-normalization → dedupe → categorize.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::skills::categorizer::CategorizedSkills;
use crate::skills::dedup::dedupe;
use crate::skills::keyword_scan;
use crate::skills::normalizer::{normalize, renormalize};
use crate::skills::source::SkillSource;

const RAW_PREVIEW_CHARS: usize = 1_000;
const TEXT_SNIPPET_CHARS: usize = 2_000;

/// Where a profile's candidate tokens came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    Model,
    KeywordScan,
}

/// Canonical, deduplicated, categorized skills of one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfile {
    /// Unique skills in first-seen order.
    pub all_skills: Vec<String>,
    pub categories: CategorizedSkills,
    pub source: ProfileSource,
    /// Start of the last model response, when a model was asked.
    pub raw_model_output_preview: Option<String>,
    pub text_snippet: String,
}

/// Extracts a profile from `text`, asking `source` first when one is configured.
///
/// Never fails: any source problem is logged and the keyword scan takes over.
pub async fn extract_profile(text: &str, source: Option<&dyn SkillSource>) -> SkillProfile {
    let mut raw_preview = None;

    if let Some(source) = source {
        match source.suggest(text).await {
            Ok(suggestion) => {
                info!(
                    "Skill source '{}' returned {} candidate tokens",
                    source.name(),
                    suggestion.tokens.len()
                );
                let preview = truncate_chars(&suggestion.raw, RAW_PREVIEW_CHARS);
                return build_profile(&suggestion.tokens, ProfileSource::Model, Some(preview), text);
            }
            Err(e) => {
                warn!(
                    "Skill source '{}' unavailable, falling back to keyword scan: {e}",
                    source.name()
                );
                raw_preview = e.raw().map(|raw| truncate_chars(raw, RAW_PREVIEW_CHARS));
            }
        }
    }

    let tokens = keyword_scan::scan(text);
    info!("Keyword scan matched {} base keywords", tokens.len());
    build_profile(&tokens, ProfileSource::KeywordScan, raw_preview, text)
}

/// Pure part of the pipeline: raw tokens in, profile out.
pub fn build_profile<S: AsRef<str>>(
    raw_tokens: &[S],
    source: ProfileSource,
    raw_model_output_preview: Option<String>,
    text: &str,
) -> SkillProfile {
    let normalized = dedupe(
        raw_tokens
            .iter()
            .map(|t| normalize(t.as_ref()))
            .filter(|t| !t.is_empty()),
    );
    let all_skills = dedupe(
        normalized
            .iter()
            .map(|s| renormalize(s))
            .filter(|s| !s.is_empty()),
    );
    debug!(
        "Normalized {} raw tokens into {} skills",
        raw_tokens.len(),
        all_skills.len()
    );

    let categories = CategorizedSkills::from_skills(&all_skills);

    SkillProfile {
        all_skills,
        categories,
        source,
        raw_model_output_preview,
        text_snippet: truncate_chars(text, TEXT_SNIPPET_CHARS),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
