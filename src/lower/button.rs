use super::wrapper::{self, Parts, WrapKind};
use crate::ir::{Element, Fragment, Tag};
use crate::schema::ButtonSpec;

pub const BUTTON_CLASSES: &str = "btn btn-primary mx-1";

/// One row holding every button; `None` for an empty list.
pub fn build(buttons: &[ButtonSpec]) -> Option<Fragment> {
    if buttons.is_empty() {
        return None;
    }
    let elements = buttons
        .iter()
        .map(|button| {
            Element::new(Tag::Button)
                .with_classes(BUTTON_CLASSES)
                .with_text(button.text.as_str())
        })
        .collect();
    Some(wrapper::wrap(Parts::buttons(elements), &WrapKind::Buttons))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(text: &str) -> ButtonSpec {
        ButtonSpec { text: text.to_string() }
    }

    #[test]
    fn empty_list_builds_nothing() {
        assert!(build(&[]).is_none());
    }

    #[test]
    fn all_buttons_share_one_row() {
        let fragment = build(&[spec("Save"), spec("Cancel")]).unwrap();
        assert_eq!(fragment.len(), 1);
        let col = fragment[0].as_element().unwrap().elements().next().unwrap();
        let buttons: Vec<&Element> = col.elements().collect();
        assert_eq!(buttons.len(), 2);
        assert!(buttons.iter().all(|b| b.tag == Tag::Button));
        assert_eq!(buttons[0].text_content(), "Save");
        assert_eq!(buttons[1].text_content(), "Cancel");
        assert_eq!(buttons[1].classes, ["btn", "btn-primary", "mx-1"]);
    }
}
