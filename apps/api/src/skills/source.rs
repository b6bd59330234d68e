//! Candidate-token sources: pluggable, trait-based providers of raw skill strings.
//!
//! Default: no source configured, the extractor runs the local keyword scan.
//! `GeminiSkillSource` asks the model for a skill list and retries under a `RetryPolicy`.
//!
//! `AppState` holds an `Option<Arc<dyn SkillSource>>`, chosen at startup from config.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::GeminiClient;
use crate::skills::prompts::build_skills_prompt;

/// Raw tokens suggested by a source, plus the raw response they were parsed from.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub tokens: Vec<String>,
    pub raw: String,
}

/// Why a source produced nothing usable. Never surfaced to API callers;
/// the extractor falls back to the keyword scan on any variant.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("skill source unavailable: {0}")]
    Unavailable(String),

    #[error("skill source returned a malformed response")]
    Malformed { raw: String },
}

impl SourceError {
    pub fn raw(&self) -> Option<&str> {
        match self {
            SourceError::Malformed { raw } => Some(raw),
            SourceError::Unavailable(_) => None,
        }
    }
}

/// The candidate-source trait. Implement this to swap providers without touching
/// the extractor or handlers.
#[async_trait]
pub trait SkillSource: Send + Sync {
    async fn suggest(&self, text: &str) -> Result<Suggestion, SourceError>;

    /// Short label reported in profiles and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Bounded retry with linearly increasing delay: attempt `n` (1-based retry)
/// waits `base_delay * n`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(600),
        }
    }
}

impl RetryPolicy {
    pub fn delay_before(&self, retry: u32) -> Duration {
        self.base_delay * retry
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiSkillSource
// ────────────────────────────────────────────────────────────────────────────

pub struct GeminiSkillSource {
    client: GeminiClient,
    retry: RetryPolicy,
}

impl GeminiSkillSource {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            retry: RetryPolicy::default(),
        }
    }
}

#[async_trait]
impl SkillSource for GeminiSkillSource {
    async fn suggest(&self, text: &str) -> Result<Suggestion, SourceError> {
        let prompt = build_skills_prompt(text);
        let mut last_error = SourceError::Unavailable("no attempt made".to_string());

        for attempt in 0..=self.retry.max_retries {
            if attempt > 0 {
                let delay = self.retry.delay_before(attempt);
                warn!(
                    "Skill extraction attempt {} failed ({}), retrying after {}ms...",
                    attempt,
                    last_error,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let raw = match self.client.generate(&prompt, JSON_ONLY_SYSTEM).await {
                Ok(raw) => raw,
                Err(e) if e.is_transient() => {
                    last_error = SourceError::Unavailable(e.to_string());
                    continue;
                }
                Err(e) => return Err(SourceError::Unavailable(e.to_string())),
            };

            match parse_suggestion(&raw) {
                Some(tokens) => {
                    debug!("Model suggested {} raw skill tokens", tokens.len());
                    return Ok(Suggestion { tokens, raw });
                }
                None => last_error = SourceError::Malformed { raw },
            }
        }

        Err(last_error)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response parsing
// ────────────────────────────────────────────────────────────────────────────

/// Extracts a token list from a model response.
///
/// 1. The span from the first `{` to the last `}` as a JSON object with a `skills` array;
///    non-string items are dropped.
/// 2. Otherwise the first non-empty `[...]` span, collecting every quoted item.
///
/// Returns `None` when neither strategy yields at least one token.
pub fn parse_suggestion(raw: &str) -> Option<Vec<String>> {
    parse_skills_object(raw)
        .or_else(|| parse_quoted_list(raw))
        .filter(|tokens| !tokens.is_empty())
}

fn parse_skills_object(raw: &str) -> Option<Vec<String>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    let value: Value = serde_json::from_str(&raw[start..=end]).ok()?;
    let skills = value.get("skills")?.as_array()?;
    Some(
        skills
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
    )
}

fn parse_quoted_list(raw: &str) -> Option<Vec<String>> {
    let inner = first_bracket_span(raw)?;

    let mut items = Vec::new();
    let mut rest = inner;
    while let Some(open) = rest.find(['"', '\'']) {
        let after = &rest[open + 1..];
        let Some(close) = after.find(['"', '\'']) else {
            break;
        };
        if close > 0 {
            items.push(after[..close].to_string());
        }
        rest = &after[close + 1..];
    }
    Some(items)
}

/// Contents of the first `[...]` span holding anything besides whitespace.
fn first_bracket_span(raw: &str) -> Option<&str> {
    let mut rest = raw;
    loop {
        let start = rest.find('[')?;
        let len = rest[start + 1..].find(']')?;
        let inner = &rest[start + 1..start + 1 + len];
        if !inner.trim().is_empty() {
            return Some(inner);
        }
        rest = &rest[start + 1 + len + 1..];
    }
}
