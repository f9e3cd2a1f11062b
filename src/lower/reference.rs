//! Reference rows: explanatory text, links and inline inputs.
use super::input;
use super::wrapper::{COL_CLASSES, ROW_CLASSES};
use crate::ir::{Element, Fragment, Node, Tag};
use crate::schema::ReferenceSpec;

/// All references share a single row and column; `None` for an empty list.
pub fn build(references: &[ReferenceSpec]) -> Option<Fragment> {
    if references.is_empty() {
        return None;
    }
    let mut col = Element::new(Tag::Div).with_classes(COL_CLASSES);
    for reference in references {
        if let Some(text) = present(&reference.text_without_ref) {
            col.push(Element::new(Tag::Span).with_text(text));
        }
        if let Some(href) = present(&reference.href) {
            let mut link = Element::new(Tag::A).with_attr("href", href);
            if let Some(text) = present(&reference.text) {
                link.push(Node::text(text));
            }
            col.push(link);
        }
        if let Some(config) = &reference.input {
            col.push(input::bare_input(config));
        }
    }
    let row = Element::new(Tag::Div).with_classes(ROW_CLASSES).with_child(col);
    Some(vec![row.into()])
}

/// Empty strings count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn references(value: serde_json::Value) -> Vec<ReferenceSpec> {
        serde_json::from_value(value).unwrap()
    }
    fn col_children(fragment: &Fragment) -> Vec<&Element> {
        assert_eq!(fragment.len(), 1);
        let col = fragment[0].as_element().unwrap().elements().next().unwrap();
        col.elements().collect()
    }

    #[test]
    fn empty_list_builds_nothing() {
        assert!(build(&[]).is_none());
    }

    #[test]
    fn parts_compose_left_to_right() {
        let fragment = build(&references(json!([
            { "text without ref": "Already registered?", "text": "Sign in", "ref": "/signin" },
            { "input": { "type": "checkbox", "checked": true } },
            { "text": "ignored without ref" }
        ])))
        .unwrap();
        let children = col_children(&fragment);
        let tags: Vec<Tag> = children.iter().map(|e| e.tag).collect();
        assert_eq!(tags, [Tag::Span, Tag::A, Tag::Input]);
        assert_eq!(children[0].text_content(), "Already registered?");
        assert_eq!(children[1].text_content(), "Sign in");
        assert_eq!(children[1].attr("href"), Some(&json!("/signin")));
        assert_eq!(children[2].attr("checked"), Some(&json!(true)));
    }

    #[test]
    fn absent_parts_leave_no_placeholder() {
        let fragment = build(&references(json!([{}, { "text without ref": "" }]))).unwrap();
        assert!(col_children(&fragment).is_empty());
    }
}
