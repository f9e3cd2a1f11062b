//! Field → labelled control (or checkbox group).
use indexmap::IndexMap;
use serde_json::Value;

use super::ident::{self, BaseId};
use super::wrapper::{self, Parts, WrapKind};
use super::MaskHook;
use crate::ir::{Element, Fragment, Node, Tag};
use crate::schema::{FieldSpec, InputConfig, InputKind};

/// Structural family of an input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Control,
    Checkbox,
    Unclassified,
}

impl Family {
    pub fn of(kind: &InputKind) -> Self {
        match kind {
            InputKind::Text
            | InputKind::Number
            | InputKind::Email
            | InputKind::Textarea
            | InputKind::File
            | InputKind::Date
            | InputKind::Password => Family::Control,
            InputKind::Checkbox => Family::Checkbox,
            InputKind::Other(_) | InputKind::Untyped => Family::Unclassified,
        }
    }
    fn input_classes(self) -> &'static str {
        match self {
            Family::Control => "form-control",
            Family::Checkbox => "form-check-input",
            Family::Unclassified => "",
        }
    }
    fn label_classes(self) -> &'static str {
        match self {
            Family::Checkbox => "form-check-label",
            Family::Control | Family::Unclassified => "col-form-label",
        }
    }
    fn wrap_kind(self) -> WrapKind {
        match self {
            Family::Control => WrapKind::Control,
            Family::Checkbox => WrapKind::Checkbox,
            Family::Unclassified => WrapKind::Field,
        }
    }
}

/// Ids chosen for one field: the base id plus one id per checkbox-group value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    pub base: BaseId,
    pub members: Vec<String>,
}

impl FieldIds {
    /// Straight from the label and the group values, without de-duplication.
    pub fn derive(field: &FieldSpec, position: usize) -> Self {
        Self {
            base: ident::generate(field.label.as_deref(), position),
            members: field.input.multiple().unwrap_or_default(),
        }
    }
}

pub fn compile(field: &FieldSpec, position: usize, mask_hook: &mut dyn MaskHook) -> Fragment {
    compile_with_ids(field, &FieldIds::derive(field, position), mask_hook)
}

/// Compile with already chosen ids.
pub fn compile_with_ids(field: &FieldSpec, ids: &FieldIds, mask_hook: &mut dyn MaskHook) -> Fragment {
    let kind = field.input.kind();
    let family = Family::of(&kind);
    let element_id = ids.base.element_id(kind.as_str());

    if let Some(values) = field.input.multiple() {
        log::debug!("field `{}`: checkbox group of {}", ids.base, values.len());
        // no single control to point at
        let label = field.label.as_deref().map(|text| label_element(text, None, family));
        let members = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let id = ids.members.get(i).map_or(value.as_str(), String::as_str);
                Node::from(group_member(value, id))
            })
            .collect();
        let parts = Parts { label, input: members, buttons: Vec::new() };
        return wrapper::wrap(parts, &WrapKind::CheckboxGroup);
    }

    let label = field
        .label
        .as_deref()
        .map(|text| label_element(text, Some(element_id.as_str()), family));
    let mut input = Element::new(Tag::Input)
        .with_id(element_id.as_str())
        .with_classes(family.input_classes());
    input.attrs = pass_through(&field.input);
    if let Some(mask) = field.input.mask() {
        log::trace!("mask `{mask}` → #{element_id}");
        mask_hook.apply(&element_id, mask);
    }
    log::debug!("field `{element_id}`: {family:?}");
    wrapper::wrap(Parts::control(label, input), &family.wrap_kind())
}

/// Unlabelled, unwrapped input used inside reference rows.
pub fn bare_input(config: &InputConfig) -> Element {
    let family = Family::of(&config.kind());
    let mut input = Element::new(Tag::Input).with_classes(family.input_classes());
    input.attrs = pass_through(config);
    input
}

/// Mask-derived defaults first, then the whole config on top.
fn pass_through(config: &InputConfig) -> IndexMap<String, Value> {
    let mut attrs = IndexMap::new();
    if let Some(mask) = config.mask() {
        attrs.insert("placeholder".to_string(), Value::from(mask));
    }
    for (key, value) in config.iter() {
        attrs.insert(key.clone(), value.clone());
    }
    attrs
}

fn label_element(text: &str, target: Option<&str>, family: Family) -> Element {
    let mut label = Element::new(Tag::Label).with_classes(family.label_classes());
    if let Some(target) = target {
        label = label.with_attr("for", target);
    }
    label.with_text(text)
}

fn group_member(value: &str, id: &str) -> Element {
    let input = Element::new(Tag::Input)
        .with_id(id)
        .with_classes(Family::Checkbox.input_classes())
        .with_attr("type", "checkbox");
    let label = label_element(value, Some(id), Family::Checkbox);
    wrapper::check(vec![input.into()], Some(label))
}
