//! Layout containers shared by every compiled element.
//!
//! Each non-empty wrap yields exactly one row:
//!
//! ```text
//! control / field / group:  row > col > [label] input...
//! buttons:                  row > col > button...
//! checkbox:                 row > col > check > input [label]
//! ```
use crate::ir::{Element, Fragment, Node, Tag};

pub const ROW_CLASSES: &str = "row mb-3";
pub const COL_CLASSES: &str = "col";
pub const CHECK_CLASSES: &str = "form-check";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapKind {
    /// text, number, email, textarea, file, date, password
    Control,
    /// Unclassified inputs (and `color`): laid out like a control.
    Field,
    Buttons,
    Checkbox,
    CheckboxGroup,
    /// Unknown tag: nothing is emitted.
    Other(String),
}

impl WrapKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" | "password" | "number" | "email" | "file" | "textarea" | "date" => {
                Self::Control
            }
            "color" | "field" => Self::Field,
            "buttons" => Self::Buttons,
            "checkbox" => Self::Checkbox,
            "checkbox-group" => Self::CheckboxGroup,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parts {
    pub label: Option<Element>,
    pub input: Fragment,
    pub buttons: Vec<Element>,
}

impl Parts {
    pub fn control(label: Option<Element>, input: Element) -> Self {
        Self { label, input: vec![input.into()], buttons: Vec::new() }
    }
    pub fn buttons(buttons: Vec<Element>) -> Self {
        Self { buttons, ..Self::default() }
    }
}

pub fn wrap(parts: Parts, kind: &WrapKind) -> Fragment {
    let Parts { label, input, buttons } = parts;
    let mut col = Element::new(Tag::Div).with_classes(COL_CLASSES);
    match kind {
        WrapKind::Control | WrapKind::Field | WrapKind::CheckboxGroup => {
            col.extend(label.map(Node::from));
            col.extend(input);
        }
        WrapKind::Buttons => {
            col.extend(buttons.into_iter().map(Node::from));
        }
        WrapKind::Checkbox => {
            col.push(check(input, label));
        }
        WrapKind::Other(tag) => {
            log::debug!("no wrapper for kind `{tag}`");
            return Fragment::new();
        }
    }
    vec![row(col).into()]
}

/// The `form-check` container: input first, then its label.
pub fn check(input: Fragment, label: Option<Element>) -> Element {
    let mut check = Element::new(Tag::Div).with_classes(CHECK_CLASSES);
    check.extend(input);
    check.extend(label.map(Node::from));
    check
}

fn row(col: Element) -> Element {
    Element::new(Tag::Div).with_classes(ROW_CLASSES).with_child(col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn label() -> Element {
        Element::new(Tag::Label).with_text("L")
    }
    fn input() -> Element {
        Element::new(Tag::Input).with_id("i")
    }
    fn only_row(fragment: &Fragment) -> &Element {
        assert_eq!(fragment.len(), 1);
        let row = fragment[0].as_element().unwrap();
        assert_eq!(row.classes, ["row", "mb-3"]);
        row
    }
    fn only_col(row: &Element) -> &Element {
        let cols: Vec<_> = row.elements().collect();
        assert_eq!(cols.len(), 1);
        assert_eq!(cols[0].classes, ["col"]);
        cols[0]
    }

    #[test]
    fn control_puts_label_before_input() {
        let fragment = wrap(Parts::control(Some(label()), input()), &WrapKind::Control);
        let col = only_col(only_row(&fragment));
        let tags: Vec<Tag> = col.elements().map(|e| e.tag).collect();
        assert_eq!(tags, [Tag::Label, Tag::Input]);
    }

    #[test]
    fn control_without_label() {
        let fragment = wrap(Parts::control(None, input()), &WrapKind::Field);
        let col = only_col(only_row(&fragment));
        assert_eq!(col.children.len(), 1);
    }

    #[test]
    fn checkbox_puts_input_before_label_inside_check() {
        let fragment = wrap(Parts::control(Some(label()), input()), &WrapKind::Checkbox);
        let col = only_col(only_row(&fragment));
        let check = col.elements().next().unwrap();
        assert_eq!(check.classes, ["form-check"]);
        let tags: Vec<Tag> = check.elements().map(|e| e.tag).collect();
        assert_eq!(tags, [Tag::Input, Tag::Label]);
    }

    #[test]
    fn buttons_keep_order() {
        let buttons = vec![
            Element::new(Tag::Button).with_text("a"),
            Element::new(Tag::Button).with_text("b"),
        ];
        let fragment = wrap(Parts::buttons(buttons), &WrapKind::Buttons);
        let col = only_col(only_row(&fragment));
        let texts: Vec<String> = col.elements().map(Element::text_content).collect();
        assert_eq!(texts, ["a", "b"]);
    }

    #[test]
    fn unknown_kind_is_empty() {
        let fragment = wrap(Parts::control(Some(label()), input()), &WrapKind::from_tag("range"));
        assert!(fragment.is_empty());
    }

    #[test]
    fn tags_map_to_kinds() {
        assert_eq!(WrapKind::from_tag("textarea"), WrapKind::Control);
        assert_eq!(WrapKind::from_tag("color"), WrapKind::Field);
        assert_eq!(WrapKind::from_tag("field"), WrapKind::Field);
        assert_eq!(WrapKind::from_tag("buttons"), WrapKind::Buttons);
        assert_eq!(WrapKind::from_tag("checkbox"), WrapKind::Checkbox);
        assert_eq!(WrapKind::from_tag("x"), WrapKind::Other("x".into()));
    }
}
