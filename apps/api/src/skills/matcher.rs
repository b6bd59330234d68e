//! Skill matcher: set comparison of a reference (job description) profile against
//! a candidate (resume) profile.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::skills::categorizer::CategorizedSkills;
use crate::skills::extractor::SkillProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Skills in both profiles, sorted ascending.
    pub matched_skills: Vec<String>,
    /// Reference skills absent from the candidate, sorted ascending.
    pub missing_skills: Vec<String>,
    pub matched: CategorizedSkills,
    pub missing: CategorizedSkills,
}

/// Compares `candidate` against `reference`.
///
/// An empty reference requires nothing: every candidate skill counts as matched
/// and nothing is missing.
pub fn match_profiles(reference: &SkillProfile, candidate: &SkillProfile) -> MatchResult {
    let candidate_set: BTreeSet<&String> = candidate.all_skills.iter().collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) =
        if reference.all_skills.is_empty() {
            (candidate_set.iter().map(|s| s.to_string()).collect(), Vec::new())
        } else {
            let reference_set: BTreeSet<&String> = reference.all_skills.iter().collect();
            let matched = reference_set
                .intersection(&candidate_set)
                .map(|s| s.to_string())
                .collect();
            let missing = reference_set
                .difference(&candidate_set)
                .map(|s| s.to_string())
                .collect();
            (matched, missing)
        };

    MatchResult {
        matched: CategorizedSkills::from_skills(&matched_skills),
        missing: CategorizedSkills::from_skills(&missing_skills),
        matched_skills,
        missing_skills,
    }
}
