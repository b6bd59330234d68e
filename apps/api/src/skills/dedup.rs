use std::collections::HashSet;

/// Removes repeated skills by exact string equality. First occurrence wins and
/// relative order is preserved.
pub fn dedupe<I>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
