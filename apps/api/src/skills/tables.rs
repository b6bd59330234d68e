//! Static lookup tables for skill normalization, categorization and the local keyword scan.
//!
//! Every table is an ordered slice. The rewrite table in particular is applied in
//! declaration order: reordering entries changes the output for overlapping patterns
//! (e.g. `react.js` must run before anything that would split it).

/// Ordered (pattern, canonical) rewrites applied by the normalizer.
///
/// A pattern fires when the current string equals it or contains it; every occurrence
/// is then replaced. `u_boot` can never match after underscores are folded to spaces,
/// and `wi-fi` rewrites to itself. Both are kept so the table documents every known variant.
pub const NORMALIZE_RULES: &[(&str, &str)] = &[
    ("react.js", "react"),
    ("reactjs", "react"),
    ("nodejs", "node.js"),
    ("node js", "node.js"),
    ("powerbi", "power bi"),
    ("u boot", "u-boot"),
    ("u_boot", "u-boot"),
    ("device-tree", "device tree"),
    ("embedded c", "c"),
    ("c plus plus", "c++"),
    ("cplusplus", "c++"),
    ("usb 3 0", "usb 3.0"),
    ("usb3.0", "usb 3.0"),
    ("wi fi", "wi-fi"),
    ("wi-fi", "wi-fi"),
    ("i 2 c", "i2c"),
    ("i 2 s", "i2s"),
    ("yocto project", "yocto"),
    ("petalinux sdk", "petalinux"),
    ("system verilog", "systemverilog"),
    ("devops", "devops"),
    ("microcontrollers", "microcontroller"),
];

/// Canonical skill names whose periods survive period stripping.
pub const DOTTED_SKILLS: &[&str] = &["node.js", "next.js", "asp.net"];

pub const LANGUAGES: &[&str] = &[
    "c", "c++", "c#", "python", "java", "javascript", "typescript", "go", "rust", "ruby", "php",
    "scala", "kotlin", "swift", "r",
];

pub const TOOLS: &[&str] = &[
    "git", "gdb", "cmake", "make", "gcc", "clang", "vivado", "quartus", "jtag", "docker", "helm",
    "ansible",
];

pub const PROTOCOLS: &[&str] = &[
    "i2c", "spi", "uart", "gpio", "pcie", "usb", "ethernet", "can", "i2s", "wi-fi", "wifi", "lte",
    "bluetooth",
];

pub const PLATFORMS: &[&str] = &[
    "embedded linux",
    "yocto",
    "petalinux",
    "u-boot",
    "raspberry pi",
    "stm32",
    "arm",
    "nxp",
    "imx",
    "xilinx zynq",
    "xilinx rfsoc",
    "xilinx mpsoc",
];

pub const DRIVERS: &[&str] = &[
    "kernel drivers",
    "device drivers",
    "driver development",
    "bootloader",
    "board bring-up",
    "bsp",
    "firmware",
    "kernel",
    "linux kernel",
];

/// Skills that are known but deliberately bucketed as `other`.
pub const OTHER_HINTS: &[&str] = &[
    "linux", "bash", "shell", "systemd", "sysvinit", "excel", "tableau", "power bi", "etl", "spark",
    "hadoop",
];

pub const DRIVER_HINTS: &[&str] = &[
    "driver",
    "kernel",
    "bootloader",
    "bsp",
    "board bring-up",
    "firmware",
];
pub const PLATFORM_HINTS: &[&str] = &["linux", "embedded", "yocto", "petalinux", "u-boot"];
pub const TOOL_HINTS: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
];
pub const PROTOCOL_HINTS: &[&str] = &[
    "i2c", "spi", "uart", "gpio", "usb", "ethernet", "can", "i2s", "bluetooth", "wi-fi",
];
pub const LANGUAGE_HINTS: &[&str] = &[
    "python",
    "java",
    "c++",
    "c#",
    "javascript",
    "typescript",
    "go",
    "rust",
];

/// Keywords searched by the local scan, in reporting order.
pub const BASE_KEYWORDS: &[&str] = &[
    // languages
    "c", "c++", "c#", "python", "java", "javascript", "typescript", "go", "rust", "ruby", "php",
    "scala", "kotlin", "swift", "r",
    // frontend
    "react", "angular", "vue", "next.js", "svelte", "html", "css", "sass", "tailwind",
    // backend frameworks
    "node.js", "express", "django", "flask", "spring boot", "spring", "laravel", "asp.net",
    // databases
    "sql", "postgresql", "mysql", "mongodb", "redis", "oracle", "mssql", "cassandra",
    // cloud / devops
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "helm",
    "jenkins", "github actions", "gitlab-ci", "circleci",
    // data / ml
    "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "xgboost", "lightgbm", "nlp",
    "opencv", "spacy",
    "spark", "hadoop", "etl", "airflow",
    // embedded
    "embedded linux", "yocto", "petalinux", "u-boot", "device tree", "kernel", "linux kernel",
    "bsp",
    "arm", "raspberry pi", "stm32", "nxp", "imx", "qualcomm",
    "i2c", "spi", "uart", "gpio", "pcie", "usb", "ethernet", "can", "i2s",
    "board bring-up", "firmware", "bootloader", "driver development", "kernel drivers",
    "device drivers",
    // tooling
    "git", "gdb", "cmake", "make", "gcc", "clang", "vivado", "quartus", "jtag",
    "linux", "bash", "shell", "systemd", "sysvinit", "excel", "tableau", "power bi",
    "docker-compose",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_keywords_have_no_duplicates() {
        let unique: HashSet<_> = BASE_KEYWORDS.iter().collect();
        assert_eq!(unique.len(), BASE_KEYWORDS.len());
    }

    #[test]
    fn test_base_keywords_are_lowercase() {
        for kw in BASE_KEYWORDS {
            assert_eq!(*kw, kw.to_lowercase(), "keyword '{kw}' must be lowercase");
        }
    }

    #[test]
    fn test_react_rule_precedes_reactjs_rule() {
        let pos = |p: &str| NORMALIZE_RULES.iter().position(|(k, _)| *k == p).unwrap();
        assert!(pos("react.js") < pos("reactjs"));
    }
}
