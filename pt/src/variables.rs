//! Ordered variable map for template compilation

use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::Value;

use crate::error::TemplateError;

/// Ordered mapping from placeholder name to replacement value
///
/// Insertion order is preserved and drives substitution order. Inserting a
/// name that already exists replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(String, String)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a variable, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge another map into this one; entries from `other` win
    pub fn extend_from(&mut self, other: &Variables) {
        for (k, v) in other.iter() {
            self.insert(k, v);
        }
    }

    /// Build a variable map from a parsed YAML (or JSON) document
    ///
    /// The document must be a mapping whose keys and values are all strings.
    /// Numbers, booleans, nulls and nested structures are rejected rather
    /// than coerced.
    pub fn from_yaml(doc: &Value) -> Result<Self, TemplateError> {
        debug!("Variables::from_yaml: called");
        let mapping = match doc {
            Value::Mapping(m) => m,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(TemplateError::invalid(format!(
                    "variables must be a mapping of names to strings, got {}",
                    kind(other)
                )));
            }
        };

        let mut vars = Self::new();
        for (key, value) in mapping {
            let name = match key {
                Value::String(s) => s,
                other => {
                    return Err(TemplateError::invalid(format!(
                        "variable names must be strings, got {}",
                        kind(other)
                    )));
                }
            };
            let value = match value {
                Value::String(s) => s,
                other => {
                    return Err(TemplateError::invalid(format!(
                        "value for '{}' must be a string, got {}",
                        name,
                        kind(other)
                    )));
                }
            };
            vars.insert(name.as_str(), value.as_str());
        }
        debug!("Variables::from_yaml: parsed {} variables", vars.len());
        Ok(vars)
    }

    /// Parse YAML or JSON text into a variable map
    pub fn from_yaml_str(text: &str) -> Result<Self, TemplateError> {
        let doc: Value =
            serde_yaml::from_str(text).map_err(|e| TemplateError::invalid(format!("unparsable variables: {}", e)))?;
        Self::from_yaml(&doc)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Parse a `name=value` assignment, splitting at the first `=`
pub fn parse_assignment(arg: &str) -> Result<(String, String), TemplateError> {
    match arg.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(TemplateError::invalid(format!("expected NAME=VALUE, got '{}'", arg))),
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (k, v) in iter {
            vars.insert(k, v);
        }
        vars
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Variables {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut vars = Variables::new();
        vars.insert("tone", "friendly");
        vars.insert("recipient_name", "Sarah Johnson");
        vars.insert("email_purpose", "project timeline");

        let names: Vec<_> = vars.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["tone", "recipient_name", "email_purpose"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut vars = Variables::from([("a", "1"), ("b", "2")]);
        assert_eq!(vars.insert("a", "3"), Some("1".to_string()));
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.iter().next(), Some(("a", "3")));
    }

    #[test]
    fn test_get_and_contains() {
        let vars = Variables::from([("x", "A")]);
        assert_eq!(vars.get("x"), Some("A"));
        assert!(vars.contains("x"));
        assert!(!vars.contains("y"));
    }

    #[test]
    fn test_extend_from_overrides() {
        let mut base = Variables::from([("tone", "formal"), ("name", "Alex")]);
        let overrides = Variables::from([("tone", "casual"), ("extra", "yes")]);
        base.extend_from(&overrides);
        assert_eq!(base.get("tone"), Some("casual"));
        assert_eq!(base.get("extra"), Some("yes"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_from_yaml_str_keeps_document_order() {
        let vars = Variables::from_yaml_str("zeta: last letter\nalpha: first letter\n").unwrap();
        let names: Vec<_> = vars.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_from_yaml_str_accepts_json() {
        let vars = Variables::from_yaml_str(r#"{"tone": "friendly", "recipient_name": "Sarah"}"#).unwrap();
        assert_eq!(vars.get("recipient_name"), Some("Sarah"));
    }

    #[test]
    fn test_from_yaml_rejects_number_value() {
        let err = Variables::from_yaml_str("max_words: 150\n").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidArgument(_)));
        assert!(err.to_string().contains("max_words"));
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn test_from_yaml_rejects_list_document() {
        let err = Variables::from_yaml_str("- a\n- b\n").unwrap_err();
        assert!(err.to_string().contains("a list"));
    }

    #[test]
    fn test_from_yaml_rejects_non_string_key() {
        let err = Variables::from_yaml_str("1: one\n").unwrap_err();
        assert!(err.to_string().contains("names must be strings"));
    }

    #[test]
    fn test_from_yaml_empty_document() {
        let vars = Variables::from_yaml_str("").unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("tone=friendly").unwrap(),
            ("tone".to_string(), "friendly".to_string())
        );
        assert_eq!(
            parse_assignment("expr=a=b").unwrap(),
            ("expr".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_assignment("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_assignment("no-equals").is_err());
    }

    #[test]
    fn test_serialize_in_insertion_order() {
        let vars = Variables::from([("tone", "professional"), ("recipient_name", "Alex Chen")]);
        let json = serde_json::to_string(&vars).unwrap();
        assert_eq!(json, r#"{"tone":"professional","recipient_name":"Alex Chen"}"#);
    }
}
