//! Schema acquisition: read text, optionally pre-process, decode.
use std::io::Read;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::{FormError, Result};
use crate::schema::FormSchema;

#[derive(Debug, Clone)]
pub enum SchemaSource {
    File(PathBuf),
    Stdin,
    /// In-memory document, mostly for tests and embedding.
    Text { name: String, body: String },
}

/// Optional rewrites applied to the parsed document before it is decoded as a schema.
#[derive(Debug, Clone, Default)]
pub struct Preprocess {
    /// JSON Pointer selecting the form inside a larger document (e.g. `/forms/0`).
    pub json_pointer: Option<String>,
    /// jq filter; its first output is the form.
    pub jq_expr: Option<String>,
}

impl SchemaSource {
    pub fn text(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Text { name: name.into(), body: body.into() }
    }

    /// Name used in messages.
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Text { name, .. } => name.clone(),
        }
    }

    /// Title used when the schema has no `name`: the file stem.
    pub fn fallback_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Self::Stdin => "form".to_string(),
            Self::Text { name, .. } => name.clone(),
        }
    }

    pub fn read(&self) -> Result<String> {
        let acquisition = |error| FormError::Acquisition { source_name: self.display_name(), error };
        match self {
            Self::File(path) => std::fs::read_to_string(path).map_err(acquisition),
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).map_err(acquisition)?;
                Ok(text)
            }
            Self::Text { body, .. } => Ok(body.clone()),
        }
    }

    /// Read and decode in one step.
    pub fn load(&self, preprocess: &Preprocess) -> Result<FormSchema> {
        let text = self.read()?;
        decode(&text, &self.display_name(), preprocess)
    }
}

pub fn decode(text: &str, source_name: &str, preprocess: &Preprocess) -> Result<FormSchema> {
    let decode_error = |message: String| FormError::Decode { source_name: source_name.to_string(), message };
    if preprocess.is_identity() {
        return crate::path_de::from_str_with_path(text).map_err(decode_error);
    }
    let document = serde_json::from_str::<Value>(text).map_err(|e| decode_error(e.to_string()))?;
    let document = preprocess.apply(document, source_name)?;
    crate::path_de::from_value_with_path(document).map_err(decode_error)
}

impl Preprocess {
    pub fn is_identity(&self) -> bool {
        self.json_pointer.is_none() && self.jq_expr.is_none()
    }

    fn apply(&self, mut document: Value, source_name: &str) -> Result<Value> {
        let failed = |message: String| FormError::Preprocess { source_name: source_name.to_string(), message };
        if let Some(pointer) = self.json_pointer.as_deref() {
            document = document
                .pointer_mut(pointer)
                .map(Value::take)
                .ok_or_else(|| failed(format!("json pointer `{pointer}` matched nothing")))?;
        }
        if let Some(jq_expr) = self.jq_expr.as_deref() {
            let outputs = crate::jq_exec::run_jaq(jq_expr, &document).map_err(|e| failed(e.to_string()))?;
            if outputs.len() > 1 {
                log::warn!("{source_name}: jq produced {} outputs; using the first", outputs.len());
            }
            document = outputs
                .into_iter()
                .next()
                .ok_or_else(|| failed(format!("jq expression `{jq_expr}` produced no output")))?;
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    const NESTED: &str = r#"{ "forms": [ { "name": "inner", "fields": [ { "input": { "type": "text" } } ] } ] }"#;

    #[test]
    fn missing_file_is_an_acquisition_error() {
        let source = SchemaSource::File(PathBuf::from("/definitely/not/here.json"));
        let err = source.load(&Preprocess::default()).unwrap_err();
        assert!(matches!(err, FormError::Acquisition { .. }), "{err}");
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = SchemaSource::text("bad", "{").load(&Preprocess::default()).unwrap_err();
        assert!(matches!(err, FormError::Decode { .. }), "{err}");
        assert!(err.to_string().starts_with("failed to decode bad: "));
    }

    #[test]
    fn fallback_name_is_file_stem() {
        assert_eq!(SchemaSource::File(PathBuf::from("dir/contact_form.json")).fallback_name(), "contact_form");
        assert_eq!(SchemaSource::Stdin.fallback_name(), "form");
    }

    #[test]
    fn json_pointer_selects_form() {
        let pre = Preprocess { json_pointer: Some("/forms/0".into()), jq_expr: None };
        let schema = decode(NESTED, "nested", &pre).unwrap();
        assert_eq!(schema.name.as_deref(), Some("inner"));
    }

    #[test]
    fn json_pointer_miss_is_a_preprocess_error() {
        let pre = Preprocess { json_pointer: Some("/forms/9".into()), jq_expr: None };
        assert!(matches!(decode(NESTED, "nested", &pre), Err(FormError::Preprocess { .. })));
    }

    #[test]
    fn jq_selects_form() {
        let pre = Preprocess { json_pointer: None, jq_expr: Some(".forms[0]".into()) };
        let schema = decode(NESTED, "nested", &pre).unwrap();
        assert_eq!(schema.fields.map(|f| f.len()), Some(1));
    }

    #[test]
    fn jq_without_output_is_a_preprocess_error() {
        let pre = Preprocess { json_pointer: None, jq_expr: Some("empty".into()) };
        assert!(matches!(decode(NESTED, "nested", &pre), Err(FormError::Preprocess { .. })));
    }

    #[test]
    fn schema_errors_are_not_decode_errors() {
        let schema = decode(r#"{ "name": "x" }"#, "x", &Preprocess::default()).unwrap();
        let err = crate::lower::assemble(&schema, "x", &mut crate::lower::NoMask).unwrap_err();
        assert!(matches!(err, FormError::Schema(SchemaError::MissingFields)));
    }
}
