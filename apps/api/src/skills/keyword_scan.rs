//! Local keyword scan: the fallback candidate source when no model is available.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::skills::normalizer::normalize;
use crate::skills::tables::BASE_KEYWORDS;

/// One matcher per base keyword. A boundary is the text edge or a non-word character,
/// so symbol keywords like `c++` and `c#` still match at the end of a phrase.
static KEYWORD_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    BASE_KEYWORDS
        .iter()
        .map(|kw| {
            let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(kw));
            (*kw, Regex::new(&pattern).expect("keyword pattern is valid"))
        })
        .collect()
});

/// Returns every base keyword found in `text`, in `BASE_KEYWORDS` order.
///
/// A keyword counts when it appears with word boundaries in either the lowercased
/// text or the normalized text, so spelling variants the normalizer folds
/// (`U_Boot`, `React.js`, `Power.BI`) are still picked up.
pub fn scan(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let normalized = normalize(text);

    KEYWORD_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(&lowered) || re.is_match(&normalized))
        .map(|(kw, _)| kw.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_keywords_in_list_order() {
        let found = scan("Rust and Python developer, some Git");
        assert_eq!(found, vec!["python", "rust", "git"]);
    }

    #[test]
    fn test_scan_requires_word_boundaries() {
        let found = scan("Worked with golang and scanners");
        assert!(!found.contains(&"go".to_string()));
        assert!(!found.contains(&"can".to_string()));
    }

    #[test]
    fn test_scan_matches_symbol_keywords() {
        let found = scan("Modern C++ and C# on .NET");
        assert!(found.contains(&"c++".to_string()));
        assert!(found.contains(&"c#".to_string()));
    }

    #[test]
    fn test_scan_sees_normalized_variants() {
        let found = scan("Bootloaders: U_Boot. Dashboards in PowerBI. React.js frontends.");
        assert!(found.contains(&"u-boot".to_string()));
        assert!(found.contains(&"power bi".to_string()));
        assert!(found.contains(&"react".to_string()));
    }

    #[test]
    fn test_scan_sees_dotted_spelling() {
        let found = scan("Built Power.BI dashboards");
        assert!(found.contains(&"power bi".to_string()));
    }

    #[test]
    fn test_symbol_keywords_bound_by_non_word_chars() {
        assert!(scan("golang").is_empty());
        assert_eq!(scan("(c++)"), vec!["c", "c++"]);
        assert!(scan("embedded linux").contains(&"linux".to_string()));
    }

    #[test]
    fn test_scan_of_unrelated_text_is_empty() {
        assert!(scan("Enjoys hiking and cooking.").is_empty());
        assert!(scan("").is_empty());
    }
}
