use std::sync::Arc;

use crate::config::Config;
use crate::skills::source::SkillSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable candidate-token source. `None` means keyword scan only.
    pub skill_source: Option<Arc<dyn SkillSource>>,
}

impl AppState {
    pub fn skill_source(&self) -> Option<&dyn SkillSource> {
        self.skill_source.as_deref()
    }

    pub fn skill_source_name(&self) -> &'static str {
        self.skill_source
            .as_deref()
            .map(|s| s.name())
            .unwrap_or("keyword_scan")
    }
}
