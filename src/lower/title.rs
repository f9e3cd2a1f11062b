//! Display title for the form header.
use crate::ir::{Element, Tag};

/// Upper-cases the first character and turns underscores into spaces.
pub fn format(name: &str) -> String {
    let mut chars = name.chars();
    let capitalized: String = match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    capitalized.split('_').collect::<Vec<_>>().join(" ")
}

pub fn title_element(name: &str) -> Element {
    Element::new(Tag::H2)
        .with_id("formTitle")
        .with_classes("text-center mt-3")
        .with_text(format(name))
}
