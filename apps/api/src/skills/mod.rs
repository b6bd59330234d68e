// Skill pipeline: normalize → dedupe → categorize, fed by a pluggable candidate source,
// plus set matching between a job description profile and resume profiles.
// All model calls go through llm_client; nothing here talks HTTP directly.

pub mod categorizer;
pub mod dedup;
pub mod extractor;
pub mod handlers;
pub mod keyword_scan;
pub mod matcher;
pub mod normalizer;
pub mod prompts;
pub mod source;
pub mod tables;
