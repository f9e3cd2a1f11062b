//! Lowering: decoded form schema → element tree.
//!
//! Pure and single-pass. The only side channel is the [`MaskHook`], invoked once per masked
//! control after its id is fixed.
//!
//! Output order is fixed: title, one wrapper per field (declaration order), then at most one
//! buttons row, then at most one references row.
pub mod button;
pub mod ident;
pub mod input;
pub mod reference;
pub mod title;
pub mod wrapper;

use std::collections::HashSet;

use crate::error::{Result, SchemaError};
use crate::ir::AssembledTree;
use crate::schema::{FieldSpec, FormSchema};
use ident::BaseId;
use input::FieldIds;

/// Receives `(element id, pattern)` for every masked input.
pub trait MaskHook {
    fn apply(&mut self, element_id: &str, pattern: &str);
}

/// Drops mask requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMask;

impl MaskHook for NoMask {
    fn apply(&mut self, _element_id: &str, _pattern: &str) {}
}

pub fn assemble(
    schema: &FormSchema,
    fallback_name: &str,
    mask_hook: &mut dyn MaskHook,
) -> Result<AssembledTree> {
    let fields = match schema.fields.as_deref() {
        None => return Err(SchemaError::MissingFields.into()),
        Some([]) => return Err(SchemaError::EmptyFields.into()),
        Some(fields) => fields,
    };
    let header = schema
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback_name);
    let title = title::title_element(header);

    let mut ids = IdRegistry::default();
    let fields = fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let field_ids = ids.claim(field, position);
            input::compile_with_ids(field, &field_ids, mask_hook)
        })
        .collect();

    let buttons = schema.buttons.as_deref().and_then(button::build);
    let references = schema.references.as_deref().and_then(reference::build);

    Ok(AssembledTree { title, fields, buttons, references })
}

/// Element ids handed out so far within one form.
#[derive(Debug, Default)]
struct IdRegistry {
    taken: HashSet<String>,
}

impl IdRegistry {
    /// Ids for `field`, each one unused so far in this form.
    fn claim(&mut self, field: &FieldSpec, position: usize) -> FieldIds {
        let derived = FieldIds::derive(field, position);
        if field.input.multiple().is_some() {
            let members = derived
                .members
                .iter()
                .map(|value| {
                    let id = self.free_stem(value, position, |id: &str| id.to_string());
                    self.taken.insert(id.clone());
                    id
                })
                .collect();
            return FieldIds { base: derived.base, members };
        }

        let kind = field.input.kind();
        let render = |stem: &str| format!("{stem}-{}", kind.as_str());
        let stem = derived.base.to_string();
        let chosen = self.free_stem(&stem, position, render);
        let base = if chosen == stem { derived.base } else { BaseId::Label(chosen) };
        self.taken.insert(base.element_id(kind.as_str()));
        FieldIds { base, members: Vec::new() }
    }

    /// First of `stem`, `stem-<position>`, `stem-<position>-2`, … whose rendered id is free.
    fn free_stem(&self, stem: &str, position: usize, render: impl Fn(&str) -> String) -> String {
        let mut candidate = stem.to_string();
        let mut attempt = 1;
        while self.taken.contains(&render(&candidate)) {
            candidate = match attempt {
                1 => format!("{stem}-{position}"),
                n => format!("{stem}-{position}-{n}"),
            };
            attempt += 1;
        }
        if candidate != stem {
            log::warn!("duplicate id `{}` for field {position}; using `{}`", render(stem), render(&candidate));
        }
        candidate
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
