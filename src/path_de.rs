use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(describe)?;
    de.end().map_err(|err| err.to_string())?;
    Ok(value)
}

/// Same as [`from_str_with_path`] for a document that was already parsed (and pre-processed).
pub fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(describe)
}

fn describe<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> String {
    let path = err.path().to_string();
    format!("at JSON path {path} → {}", err.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormSchema;

    #[test]
    fn error_names_the_failing_path() {
        let err = from_str_with_path::<FormSchema>(r#"{ "fields": [{ "label": "x" }] }"#).unwrap_err();
        assert!(err.starts_with("at JSON path fields[0]"), "{err}");
        assert!(err.contains("input"), "{err}");
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(from_str_with_path::<FormSchema>("{ not json").is_err());
        assert!(from_str_with_path::<FormSchema>("{} trailing").is_err());
    }

    #[test]
    fn buttons_need_text() {
        let value = serde_json::json!({ "fields": [], "buttons": [{}] });
        let err = from_value_with_path::<FormSchema>(value).unwrap_err();
        assert!(err.starts_with("at JSON path buttons[0]"), "{err}");
    }
}
