//! Normalizer: canonicalizes one raw skill token.
//!
//! Steps run in a fixed order; later steps assume the cleanup done by earlier ones:
//! 1. trim + lowercase
//! 2. runs of underscores and tabs → space
//! 3. any run of `/` or `\` (with surrounding whitespace) → ` / `
//! 4. commas → space
//! 5. collapse whitespace
//! 6. ordered rewrite table (`tables::NORMALIZE_RULES`)
//! 7. periods → space, unless next to a digit or part of a dotted skill name
//! 8. collapse whitespace, then the rewrite table once more for spellings step 7 just split
//! 9. exact overrides (`usb 3 0`, `node`, `reactjs`)

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::skills::tables::{DOTTED_SKILLS, NORMALIZE_RULES};

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_\t]+").expect("separator pattern is valid"));

static SLASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[/\\]+\s*").expect("slash pattern is valid"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static USB3_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\busb\s+3\s+0\b").expect("usb pattern is valid"));

/// A whole dotted skill name, or a lone period. Dotted names win at the same position.
static PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    let dotted = DOTTED_SKILLS
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{dotted})\b|\.")).expect("period pattern is valid")
});

/// Normalizes a raw token. Returns an empty string for empty or whitespace-only input;
/// callers must drop empty results.
pub fn normalize(raw: &str) -> String {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return s;
    }

    let s = SEPARATOR_RE.replace_all(&s, " ");
    let s = SLASH_RE.replace_all(&s, " / ");
    let s = s.replace(',', " ");
    let s = collapse_whitespace(&s);
    let s = apply_rewrite_rules(&s);
    let s = substitute_periods(&s);
    let s = collapse_whitespace(&s);
    let s = collapse_whitespace(&apply_rewrite_rules(&s));

    apply_overrides(s)
}

/// Re-applies only the rewrite table to an already normalized token.
/// A no-op on canonical input.
pub fn renormalize(skill: &str) -> String {
    collapse_whitespace(&apply_rewrite_rules(skill.trim()))
}

/// A rule fires when the string equals or contains its pattern, and then
/// replaces every occurrence. Rules run in table order.
fn apply_rewrite_rules(s: &str) -> String {
    let mut out = s.to_string();
    for (pattern, canonical) in NORMALIZE_RULES {
        if out == *pattern || out.contains(pattern) {
            out = out.replace(pattern, canonical);
        }
    }
    out
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s, " ").trim().to_string()
}

fn substitute_periods(s: &str) -> String {
    PERIOD_RE
        .replace_all(s, |caps: &Captures| {
            let Some(m) = caps.get(0) else {
                return String::new();
            };
            if m.as_str() != "." {
                return m.as_str().to_string();
            }
            let digit_before = s[..m.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit());
            let digit_after = s[m.end()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit());
            if digit_before || digit_after {
                ".".to_string()
            } else {
                " ".to_string()
            }
        })
        .into_owned()
}

fn apply_overrides(s: String) -> String {
    let s = USB3_RE.replace_all(&s, "usb 3.0").into_owned();
    match s.as_str() {
        "node" => "node.js".to_string(),
        "reactjs" => "react".to_string(),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_driven_canonical_forms() {
        assert_eq!(normalize("React.JS"), "react");
        assert_eq!(normalize("node js"), "node.js");
        assert_eq!(normalize("PowerBI"), "power bi");
        assert_eq!(normalize("u_boot"), "u-boot");
        assert_eq!(normalize("I 2 C"), "i2c");
        assert_eq!(normalize("USB3.0"), "usb 3.0");
    }

    #[test]
    fn test_more_table_variants() {
        assert_eq!(normalize("ReactJS"), "react");
        assert_eq!(normalize("NodeJS"), "node.js");
        assert_eq!(normalize("Device-Tree"), "device tree");
        assert_eq!(normalize("Embedded C"), "c");
        assert_eq!(normalize("C Plus Plus"), "c++");
        assert_eq!(normalize("Wi Fi"), "wi-fi");
        assert_eq!(normalize("Yocto Project"), "yocto");
        assert_eq!(normalize("PetaLinux SDK"), "petalinux");
        assert_eq!(normalize("System Verilog"), "systemverilog");
        assert_eq!(normalize("Microcontrollers"), "microcontroller");
        assert_eq!(normalize("usb 3 0"), "usb 3.0");
    }

    #[test]
    fn test_empty_and_whitespace_yield_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t  "), "");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn test_whitespace_underscores_and_commas_collapse() {
        assert_eq!(normalize("  Embedded__Linux  "), "embedded linux");
        assert_eq!(normalize("spring,\tboot"), "spring boot");
        assert_eq!(normalize("board   bring-up"), "board bring-up");
    }

    #[test]
    fn test_slash_runs_become_spaced_slash() {
        assert_eq!(normalize("TCP/IP"), "tcp / ip");
        assert_eq!(normalize("ci // cd"), "ci / cd");
        assert_eq!(normalize("a\\b"), "a / b");
    }

    #[test]
    fn test_periods_become_spaces_except_near_digits_and_dotted_skills() {
        assert_eq!(normalize("Python."), "python");
        assert_eq!(normalize("python 3.10"), "python 3.10");
        assert_eq!(normalize("Node.js"), "node.js");
        assert_eq!(normalize("ASP.NET"), "asp.net");
        assert_eq!(normalize("next.js."), "next.js");
        assert_eq!(normalize("version 2."), "version 2.");
        assert_eq!(normalize("Power.BI"), "power bi");
        assert_eq!(normalize("..node.js"), "node.js");
        assert_eq!(normalize("react.j.s"), "react j s");
    }

    #[test]
    fn test_split_spellings_reach_canonical_form_in_one_pass() {
        assert_eq!(normalize("U.Boot"), "u-boot");
        assert_eq!(normalize("Wi.Fi"), "wi-fi");
        assert_eq!(normalize("node.JS"), "node.js");
    }

    #[test]
    fn test_exact_overrides() {
        assert_eq!(normalize("Node"), "node.js");
        assert_eq!(normalize("Node."), "node.js");
        assert_eq!(normalize("nodes"), "nodes");
        assert_eq!(normalize("USB  3_0"), "usb 3.0");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "React.JS",
            "node js",
            "Node",
            "PowerBI",
            "Power.BI",
            "..node.js",
            "U.Boot",
            "u_boot",
            "U Boot",
            "I 2 C",
            "i 2 s",
            "USB3.0",
            "usb 3 0",
            "Wi-Fi",
            "C Plus Plus",
            "Embedded Linux",
            "TCP/IP",
            "python 3.10",
            "version 2.",
            "Spring Boot, Hibernate",
            "Linux Kernel.",
            "asp.net",
            "react.j.s",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "normalize not idempotent for '{input}'");
            assert_eq!(renormalize(&once), once, "renormalize changed '{once}'");
        }
    }
}
