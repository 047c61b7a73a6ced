//! Config server document types.
//!
//! Field decoding mirrors the server's loose contract: absent or `null`
//! fields take their empty value, unknown fields are ignored, and
//! server-defined values (`label`, `state`, source entries) are kept as a
//! closed [`ConfigValue`] until they are written to the environment.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Configuration returned by the config server for one profile.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub profiles: Vec<String>,

    pub label: ConfigValue,

    #[serde(deserialize_with = "null_as_default")]
    pub version: String,

    pub state: ConfigValue,

    /// Sources in server order. Later sources override earlier ones when applied.
    #[serde(deserialize_with = "null_as_default")]
    pub property_sources: Vec<PropertySource>,
}

/// One named bundle of key-value entries.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PropertySource {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Entries in document order. Keys are unique.
    #[serde(deserialize_with = "source_entries")]
    pub source: Vec<(String, ConfigValue)>,
}

impl PropertySource {
    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.source.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// A server-defined value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Arrays and objects, kept as raw JSON.
    Structured(Value),
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => ConfigValue::Number(n),
            Value::String(s) => ConfigValue::String(s),
            other => ConfigValue::Structured(other),
        }
    }
}

impl ConfigValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }
}

/// The string written to the environment: strings pass through, numbers and
/// booleans use their shortest text, `null` is empty, structures are compact JSON.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => Ok(()),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Number(n) => fmt_number(n, f),
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Structured(v) => write!(f, "{}", v),
        }
    }
}

/// Integral floats below 1e21 print without a fraction (`8080.0` → `8080`),
/// so integer-typed settings survive servers that emit them as floats.
fn fmt_number(n: &Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match n.as_f64() {
        Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e21 => write!(f, "{}", x),
        _ => write!(f, "{}", n),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn source_entries<'de, D>(deserializer: D) -> Result<Vec<(String, ConfigValue)>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<serde_json::Map<String, Value>>::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, ConfigValue::from(value)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_forms() {
        assert_eq!(ConfigValue::from(json!("plain")).to_string(), "plain");
        assert_eq!(ConfigValue::from(json!(8080)).to_string(), "8080");
        assert_eq!(ConfigValue::from(json!(-3)).to_string(), "-3");
        assert_eq!(ConfigValue::from(json!(1.5)).to_string(), "1.5");
        assert_eq!(ConfigValue::from(json!(true)).to_string(), "true");
        assert_eq!(ConfigValue::from(json!(null)).to_string(), "");
        assert_eq!(ConfigValue::from(json!([1, "a"])).to_string(), r#"[1,"a"]"#);
        assert_eq!(ConfigValue::from(json!({"k": 1})).to_string(), r#"{"k":1}"#);
    }

    #[test]
    fn test_integral_floats_print_as_integers() {
        let text = |raw: &str| ConfigValue::from(serde_json::from_str::<Value>(raw).unwrap()).to_string();

        assert_eq!(text("8080.0"), "8080");
        assert_eq!(text("1e3"), "1000");
        assert_eq!(text("-2.0"), "-2");
        assert_eq!(text("0.25"), "0.25");
        assert_eq!(text("12345678901234567890"), "12345678901234567890");
        assert_eq!(text("1e21"), "1e21");
    }

    #[test]
    fn test_source_preserves_document_order() {
        let source: PropertySource = serde_json::from_str(
            r#"{"name": "s", "source": {"zeta": 1, "alpha": 2, "mid": 3}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = source.source.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(source.get("alpha"), Some(&ConfigValue::Number(Number::from(2u64))));
        assert_eq!(source.get("missing"), None);
    }

    #[test]
    fn test_null_fields_take_empty_values() {
        let doc: ConfigDocument = serde_json::from_str(
            r#"{"name": null, "profiles": null, "label": null, "propertySources": null}"#,
        )
        .unwrap();
        assert_eq!(doc, ConfigDocument::default());
        assert!(doc.label.is_null());
    }
}
