use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque mapping of field names to values.
///
/// Rows shown by the generic list screens and drafts edited by the schema
/// form are both `Record`s. Once persisted a record always carries an `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Convert any serializable wire type into a record.
    ///
    /// Fails when the value does not serialize to a JSON object.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, String> {
        match serde_json::to_value(value).map_err(|e| e.to_string())? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(format!("expected an object, got {}", other)),
        }
    }

    /// Builder-style insert, handy for literals in tests and fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Record id as a string. Numeric ids are stringified.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Value rendered the way a text input shows it.
    ///
    /// Missing and null values become an empty string.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(input_text).unwrap_or_default()
    }

    /// Like [`Record::text`], but blank values collapse to `None`.
    pub fn opt_text(&self, key: &str) -> Option<String> {
        let value = self.text(key);
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Numeric coercion of a form value. Unparseable input counts as zero.
    pub fn number(&self, key: &str) -> f64 {
        self.opt_number(key).unwrap_or(0.0)
    }

    pub fn opt_number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Truthiness of a checkbox or yes/no radio value (`true` or `"true"`).
    pub fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        }
    }

    /// Decode a single value into a typed enum or struct.
    pub fn parse<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?.clone();
        serde_json::from_value(value).ok()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Text shown for a primitive value inside an input element.
pub fn input_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_accepts_string_and_number() {
        assert_eq!(Record::new().with("id", "7").id(), Some("7".to_string()));
        assert_eq!(Record::new().with("id", 42).id(), Some("42".to_string()));
        assert_eq!(Record::new().with("id", "").id(), None);
        assert_eq!(Record::new().id(), None);
    }

    #[test]
    fn number_coerces_strings_like_a_form_input() {
        let draft = Record::new()
            .with("purityPercent", "91.6")
            .with("pieces", 3)
            .with("junk", "abc");
        assert_eq!(draft.number("purityPercent"), 91.6);
        assert_eq!(draft.number("pieces"), 3.0);
        assert_eq!(draft.number("junk"), 0.0);
        assert_eq!(draft.number("missing"), 0.0);
        assert_eq!(draft.opt_number("missing"), None);
    }

    #[test]
    fn flag_accepts_radio_strings() {
        let draft = Record::new().with("a", true).with("b", "true").with("c", "false");
        assert!(draft.flag("a"));
        assert!(draft.flag("b"));
        assert!(!draft.flag("c"));
        assert!(!draft.flag("d"));
    }

    #[test]
    fn opt_text_drops_blank_values() {
        let draft = Record::new().with("gstNo", "  ").with("panNo", "ABCDE1234F");
        assert_eq!(draft.opt_text("gstNo"), None);
        assert_eq!(draft.opt_text("panNo"), Some("ABCDE1234F".to_string()));
    }

    #[test]
    fn from_serialize_rejects_non_objects() {
        assert!(Record::from_serialize(&json!([1, 2])).is_err());
        let record = Record::from_serialize(&json!({"id": "1", "name": "A"})).unwrap();
        assert_eq!(record.text("name"), "A");
    }
}
