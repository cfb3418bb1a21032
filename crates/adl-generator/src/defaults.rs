//! Default contents of a freshly created `.adl-ignore`.

use adl_spec::Language;

/// Name of the ignore file in the output directory.
pub const IGNORE_FILE: &str = ".adl-ignore";

/// Paths that hold user-completed code, per language and template set.
const DEFAULT_PATTERNS: &[(Language, &str, &[&str])] = &[
    (Language::Go, "minimal", &["tools/*"]),
    (Language::TypeScript, "minimal", &["src/tools/*"]),
    (Language::Rust, "minimal", &["src/tools/*"]),
];

/// Default patterns for a first run. Unknown template names get none.
pub fn default_patterns(language: Language, template: &str) -> Vec<String> {
    DEFAULT_PATTERNS
        .iter()
        .find(|(lang, name, _)| *lang == language && *name == template)
        .map(|(_, _, patterns)| patterns.iter().map(|p| p.to_string()).collect())
        .unwrap_or_default()
}

/// Contents of the ignore file: a comment header, then one pattern per line.
pub fn render_ignore_file(patterns: &[String]) -> String {
    let mut contents = String::from(
        "# .adl-ignore\n\
         # Paths listed here are never regenerated by `adl generate` or `adl sync`.\n\
         # Patterns: `dir/` protects a directory, `tools/*` is a glob, and a plain\n\
         # path matches exactly or anywhere it occurs as a substring.\n",
    );
    for pattern in patterns {
        contents.push_str(pattern);
        contents.push('\n');
    }
    contents
}
