//! Field identifiers derived from labels.
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything outside `[A-Za-z0-9_]`.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Base identifier of a field, before the input type is appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseId {
    Label(String),
    Position(usize),
}

impl fmt::Display for BaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseId::Label(slug) => f.write_str(slug),
            BaseId::Position(index) => write!(f, "{index}"),
        }
    }
}

impl BaseId {
    /// `<base>-<suffix>`, the id carried by the element and its label's `for`.
    pub fn element_id(&self, suffix: &str) -> String {
        format!("{self}-{suffix}")
    }
}

pub fn generate(label: Option<&str>, position: usize) -> BaseId {
    match label.and_then(slugify) {
        Some(slug) => BaseId::Label(slug),
        None => BaseId::Position(position),
    }
}

/// Lower-cased, hyphen-joined word runs; `None` if the label has no word characters.
fn slugify(label: &str) -> Option<String> {
    if NON_WORD.replace_all(label, "").is_empty() {
        return None;
    }
    let lowered = label.to_lowercase();
    let spaced = NON_WORD.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&spaced, " ");
    Some(collapsed.trim().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_becomes_slug() {
        assert_eq!(generate(Some("First Name"), 0), BaseId::Label("first-name".into()));
        assert_eq!(generate(Some("  E-mail address:  "), 3), BaseId::Label("e-mail-address".into()));
        assert_eq!(generate(Some("snake_case_Label"), 0), BaseId::Label("snake_case_label".into()));
    }

    #[test]
    fn punctuation_runs_collapse_to_one_hyphen() {
        assert_eq!(generate(Some("a -- b!!c"), 0).to_string(), "a-b-c");
    }

    #[test]
    fn labels_without_word_characters_use_position() {
        assert_eq!(generate(Some("!!!"), 4), BaseId::Position(4));
        assert_eq!(generate(Some("Имя"), 1), BaseId::Position(1));
        assert_eq!(generate(Some(""), 2), BaseId::Position(2));
        assert_eq!(generate(None, 7), BaseId::Position(7));
    }

    #[test]
    fn non_latin_letters_are_dropped_when_mixed() {
        assert_eq!(generate(Some("Имя name"), 0).to_string(), "name");
    }

    #[test]
    fn slugs_are_clean() {
        for label in ["Hello, World!", "--x--", "A1 b2 C3", "  trailing. ", "Zip/Postal code"] {
            let id = generate(Some(label), 0).to_string();
            assert_eq!(id, id.to_lowercase());
            assert!(!id.starts_with('-') && !id.ends_with('-'), "{id}");
            assert!(!id.contains("--") && !id.contains(' '), "{id}");
            assert_eq!(id, generate(Some(label), 9).to_string());
        }
    }

    #[test]
    fn element_id_appends_suffix() {
        assert_eq!(BaseId::Position(0).element_id("text"), "0-text");
        assert_eq!(BaseId::Label("age".into()).element_id("number"), "age-number");
    }
}
