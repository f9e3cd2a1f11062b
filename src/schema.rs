//! Serde model of the form schema document.
//!
//! Only the envelope is strongly typed. Input configuration stays a JSON object so that every key
//! the author wrote can be carried onto the produced element in declaration order.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormSchema {
    #[serde(default)]
    pub name: Option<String>,
    /// Required and non-empty; checked during assembly rather than decoding so that a missing
    /// list is reported as a schema error.
    #[serde(default)]
    pub fields: Option<Vec<FieldSpec>>,
    #[serde(default)]
    pub references: Option<Vec<ReferenceSpec>>,
    #[serde(default)]
    pub buttons: Option<Vec<ButtonSpec>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldSpec {
    #[serde(default)]
    pub label: Option<String>,
    pub input: InputConfig,
}

/// Per-field input options. `type` drives rendering; everything else is pass-through.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct InputConfig(pub Map<String, Value>);

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReferenceSpec {
    #[serde(rename = "text without ref", default)]
    pub text_without_ref: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "ref", default)]
    pub href: Option<String>,
    #[serde(default)]
    pub input: Option<InputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ButtonSpec {
    pub text: String,
}

// ————————————————————————————————————————————————————————————————————————————
// INPUT KIND
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Email,
    Textarea,
    File,
    Date,
    Password,
    Checkbox,
    /// Any other `type` value; rendered with no classification.
    Other(String),
    /// `type` absent, null, non-string or empty.
    Untyped,
}

impl InputKind {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Untyped,
            Some("text") => Self::Text,
            Some("number") => Self::Number,
            Some("email") => Self::Email,
            Some("textarea") => Self::Textarea,
            Some("file") => Self::File,
            Some("date") => Self::Date,
            Some("password") => Self::Password,
            Some("checkbox") => Self::Checkbox,
            Some(other) => Self::Other(other.to_string()),
        }
    }
    /// The suffix used when composing element ids.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Textarea => "textarea",
            Self::File => "file",
            Self::Date => "date",
            Self::Password => "password",
            Self::Checkbox => "checkbox",
            Self::Other(other) => other,
            Self::Untyped => "untyped",
        }
    }
}

impl InputConfig {
    pub fn kind(&self) -> InputKind {
        InputKind::parse(self.0.get("type").and_then(Value::as_str))
    }
    pub fn mask(&self) -> Option<&str> {
        self.0.get("mask").and_then(Value::as_str).filter(|m| !m.is_empty())
    }
    /// Values of a checkbox group, if the field declares one.
    pub fn multiple(&self) -> Option<Vec<String>> {
        let Value::Array(xs) = self.0.get("multiple")? else {
            return None;
        };
        let values = xs
            .iter()
            .map(|x| match x {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        Some(values)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for InputConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
