//! Categorizer: assigns every normalized skill to exactly one of six fixed buckets.
//!
//! Exact lookups run first (languages, tools, protocols, platforms, drivers, other hints),
//! then ordered substring heuristics, then `Other`. The heuristics are loose on purpose:
//! anything containing `go` or `can` as a substring lands in a bucket.

use serde::{Deserialize, Serialize};

use crate::skills::tables::{
    DRIVERS, DRIVER_HINTS, LANGUAGES, LANGUAGE_HINTS, OTHER_HINTS, PLATFORMS, PLATFORM_HINTS,
    PROTOCOLS, PROTOCOL_HINTS, TOOLS, TOOL_HINTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Tools,
    Protocols,
    Platforms,
    Drivers,
    Other,
}

impl SkillCategory {
    /// Display order of the buckets.
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::Tools,
        SkillCategory::Protocols,
        SkillCategory::Platforms,
        SkillCategory::Drivers,
        SkillCategory::Other,
    ];
}

/// Exact membership tables, checked in this order.
const EXACT: &[(&[&str], SkillCategory)] = &[
    (LANGUAGES, SkillCategory::Languages),
    (TOOLS, SkillCategory::Tools),
    (PROTOCOLS, SkillCategory::Protocols),
    (PLATFORMS, SkillCategory::Platforms),
    (DRIVERS, SkillCategory::Drivers),
    (OTHER_HINTS, SkillCategory::Other),
];

/// Substring heuristics, checked in this order after every exact table misses.
const HEURISTICS: &[(&[&str], SkillCategory)] = &[
    (DRIVER_HINTS, SkillCategory::Drivers),
    (PLATFORM_HINTS, SkillCategory::Platforms),
    (TOOL_HINTS, SkillCategory::Tools),
    (PROTOCOL_HINTS, SkillCategory::Protocols),
    (LANGUAGE_HINTS, SkillCategory::Languages),
];

/// Total, deterministic category assignment.
pub fn categorize(skill: &str) -> SkillCategory {
    let low = skill.to_lowercase();

    if let Some((_, category)) = EXACT.iter().find(|(set, _)| set.contains(&low.as_str())) {
        return *category;
    }

    HEURISTICS
        .iter()
        .find(|(hints, _)| hints.iter().any(|h| low.contains(h)))
        .map(|(_, category)| *category)
        .unwrap_or(SkillCategory::Other)
}

/// Skills grouped by category. All six keys are always present when serialized,
/// each holding its skills in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub protocols: Vec<String>,
    pub platforms: Vec<String>,
    pub drivers: Vec<String>,
    pub other: Vec<String>,
}

impl CategorizedSkills {
    /// Buckets each skill via `categorize`, preserving the input order within a bucket.
    pub fn from_skills<'a, I>(skills: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut out = Self::default();
        for skill in skills {
            out.bucket_mut(categorize(skill)).push(skill.clone());
        }
        out
    }

    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Protocols => &self.protocols,
            SkillCategory::Platforms => &self.platforms,
            SkillCategory::Drivers => &self.drivers,
            SkillCategory::Other => &self.other,
        }
    }

    pub fn len(&self) -> usize {
        SkillCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Protocols => &mut self.protocols,
            SkillCategory::Platforms => &mut self.platforms,
            SkillCategory::Drivers => &mut self.drivers,
            SkillCategory::Other => &mut self.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_table_hits() {
        assert_eq!(categorize("python"), SkillCategory::Languages);
        assert_eq!(categorize("docker"), SkillCategory::Tools);
        assert_eq!(categorize("i2c"), SkillCategory::Protocols);
        assert_eq!(categorize("yocto"), SkillCategory::Platforms);
        assert_eq!(categorize("bootloader"), SkillCategory::Drivers);
        assert_eq!(categorize("excel"), SkillCategory::Other);
    }

    #[test]
    fn test_exact_tables_win_over_heuristics() {
        // "linux kernel" would hit the driver hint anyway, "linux" would hit platforms.
        assert_eq!(categorize("linux"), SkillCategory::Other);
        assert_eq!(categorize("embedded linux"), SkillCategory::Platforms);
        assert_eq!(categorize("linux kernel"), SkillCategory::Drivers);
    }

    #[test]
    fn test_heuristic_order() {
        assert_eq!(categorize("linux device driver"), SkillCategory::Drivers);
        assert_eq!(categorize("embedded systems"), SkillCategory::Platforms);
        assert_eq!(categorize("aws lambda"), SkillCategory::Tools);
        assert_eq!(categorize("usb 3.0"), SkillCategory::Protocols);
        assert_eq!(categorize("python 3.10"), SkillCategory::Languages);
    }

    #[test]
    fn test_loose_substring_matches_are_kept() {
        // "mongodb" contains "go"
        assert_eq!(categorize("mongodb"), SkillCategory::Languages);
        // "scan" contains "can"
        assert_eq!(categorize("scan chains"), SkillCategory::Protocols);
    }

    #[test]
    fn test_unknown_defaults_to_other() {
        assert_eq!(categorize("react"), SkillCategory::Other);
        assert_eq!(categorize(""), SkillCategory::Other);
        assert_eq!(categorize("tableau"), SkillCategory::Other);
    }

    #[test]
    fn test_categorize_is_deterministic() {
        for skill in ["python", "mongodb", "xyz", "u-boot", "wifi"] {
            assert_eq!(categorize(skill), categorize(skill));
        }
    }

    #[test]
    fn test_categorized_skills_preserves_order_and_keys() {
        let skills: Vec<String> = ["rust", "git", "c", "spi", "other-thing"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let cats = CategorizedSkills::from_skills(&skills);
        assert_eq!(cats.languages, vec!["rust", "c"]);
        assert_eq!(cats.tools, vec!["git"]);
        assert_eq!(cats.protocols, vec!["spi"]);
        assert_eq!(cats.other, vec!["other-thing"]);
        assert_eq!(cats.len(), 5);

        let json = serde_json::to_value(&CategorizedSkills::default()).unwrap();
        for key in ["languages", "tools", "protocols", "platforms", "drivers", "other"] {
            assert_eq!(json[key], serde_json::json!([]));
        }
    }
}
