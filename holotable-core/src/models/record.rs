//! The normalized record model.
//!
//! Raw API responses arrive as untyped JSON. Normalization happens
//! once, immediately after fetch: bookkeeping fields are stripped and
//! every remaining value becomes an explicit [`FieldValue`] variant.
//! The classifier and renderers never branch on raw JSON shapes.

use serde_json::Value;

use crate::error::CoreError;
use crate::models::links::LinkTable;

/// Metadata fields that are stripped during normalization and never
/// rendered.
pub const BOOKKEEPING_FIELDS: &[&str] = &["url", "created", "edited"];

// ============================================================================
// Field Value
// ============================================================================

/// A normalized field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// An ordered sequence of text items.
    Sequence(Vec<String>),
    /// A single cross-reference locator (URL).
    Reference(String),
    /// An ordered sequence of cross-reference locators.
    ReferenceList(Vec<String>),
}

impl FieldValue {
    /// Formats a number the way the archive displays it: integral
    /// values without a decimal point.
    pub fn number_text(n: f64) -> String {
        if n.fract() == 0.0 && n.abs() < 1e15 {
            format!("{}", n as i64)
        } else {
            format!("{n}")
        }
    }
}

// ============================================================================
// Resource Record
// ============================================================================

/// A fetched archive record, normalized and stripped of bookkeeping.
///
/// Field order matches the upstream response; it drives row order in
/// the rendered table. Records are transient: fetched per trigger and
/// discarded once rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceRecord {
    fields: Vec<(String, FieldValue)>,
}

impl ResourceRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a raw JSON object into a record.
    ///
    /// Bookkeeping fields are dropped. Fields named in the link table
    /// become [`FieldValue::Reference`] or
    /// [`FieldValue::ReferenceList`] by arity; other arrays become
    /// [`FieldValue::Sequence`]; strings and numbers map directly.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRecord`] if the value is not an
    /// object, or contains a shape the archive never produces (nested
    /// objects, arrays of non-strings).
    pub fn from_json(value: Value, links: &LinkTable) -> Result<Self, CoreError> {
        let Value::Object(map) = value else {
            return Err(CoreError::InvalidRecord(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        };

        let mut fields = Vec::with_capacity(map.len());
        // Row order follows response order; requires serde_json's
        // preserve_order feature.
        for (name, raw) in map {
            if BOOKKEEPING_FIELDS.contains(&name.as_str()) {
                continue;
            }
            let value = normalize_value(&name, raw, links)?;
            fields.push((name, value));
        }

        Ok(Self { fields })
    }

    /// Removes any bookkeeping fields from the record.
    ///
    /// Normalization already strips them, so this is a no-op on
    /// records built through [`ResourceRecord::from_json`]; applying
    /// it again is always safe.
    pub fn strip_bookkeeping(&mut self) {
        self.fields
            .retain(|(name, _)| !BOOKKEEPING_FIELDS.contains(&name.as_str()));
    }

    /// Returns the value for a field, if present.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Returns the text of a field, if it is a text field.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Iterates over fields in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Appends a field. Used by tests and fixtures.
    pub fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Normalizes a single raw value under its field name.
fn normalize_value(name: &str, raw: Value, links: &LinkTable) -> Result<FieldValue, CoreError> {
    if links.is_link_field(name) {
        return normalize_reference(name, raw);
    }

    match raw {
        Value::String(s) => Ok(FieldValue::Text(s)),
        Value::Number(n) => n
            .as_f64()
            .map(FieldValue::Number)
            .ok_or_else(|| CoreError::InvalidRecord(format!("field {name}: unrepresentable number"))),
        Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
        Value::Null => Ok(FieldValue::Text(String::new())),
        Value::Array(items) => {
            let mut seq = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => seq.push(s),
                    other => {
                        return Err(CoreError::InvalidRecord(format!(
                            "field {name}: expected string items, got {}",
                            json_kind(&other)
                        )))
                    }
                }
            }
            Ok(FieldValue::Sequence(seq))
        }
        Value::Object(_) => Err(CoreError::InvalidRecord(format!(
            "field {name}: nested objects are not supported"
        ))),
    }
}

/// Normalizes a cross-reference field: a lone locator string or an
/// array of locator strings.
fn normalize_reference(name: &str, raw: Value) -> Result<FieldValue, CoreError> {
    match raw {
        Value::String(url) => Ok(FieldValue::Reference(url)),
        Value::Array(items) => {
            let mut urls = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(url) => urls.push(url),
                    other => {
                        return Err(CoreError::InvalidRecord(format!(
                            "field {name}: expected locator strings, got {}",
                            json_kind(&other)
                        )))
                    }
                }
            }
            Ok(FieldValue::ReferenceList(urls))
        }
        other => Err(CoreError::InvalidRecord(format!(
            "field {name}: expected a locator or list of locators, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(value: Value) -> ResourceRecord {
        ResourceRecord::from_json(value, &LinkTable::default()).unwrap()
    }

    #[test]
    fn test_bookkeeping_fields_dropped() {
        let record = normalize(json!({
            "name": "Tatooine",
            "url": "https://swapi.dev/api/planets/1/",
            "created": "2014-12-09T13:50:49.641000Z",
            "edited": "2014-12-20T20:58:18.411000Z"
        }));

        assert_eq!(record.len(), 1);
        assert!(record.get("url").is_none());
        assert!(record.get("created").is_none());
        assert!(record.get("edited").is_none());
    }

    #[test]
    fn test_strip_is_idempotent() {
        let mut record = normalize(json!({
            "name": "Tatooine",
            "url": "https://swapi.dev/api/planets/1/"
        }));
        let stripped = record.clone();

        record.strip_bookkeeping();
        assert_eq!(record, stripped);
        record.strip_bookkeeping();
        assert_eq!(record, stripped);
    }

    #[test]
    fn test_link_fields_become_references() {
        let record = normalize(json!({
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": [
                "https://swapi.dev/api/films/1/",
                "https://swapi.dev/api/films/2/"
            ]
        }));

        assert_eq!(
            record.get("homeworld"),
            Some(&FieldValue::Reference(
                "https://swapi.dev/api/planets/1/".to_string()
            ))
        );
        assert!(matches!(
            record.get("films"),
            Some(FieldValue::ReferenceList(urls)) if urls.len() == 2
        ));
    }

    #[test]
    fn test_empty_reference_list_kept() {
        let record = normalize(json!({ "starships": [] }));
        assert_eq!(
            record.get("starships"),
            Some(&FieldValue::ReferenceList(Vec::new()))
        );
    }

    #[test]
    fn test_plain_array_becomes_sequence() {
        let record = normalize(json!({ "producer": ["Gary Kurtz", "Rick McCallum"] }));
        assert!(matches!(
            record.get("producer"),
            Some(FieldValue::Sequence(items)) if items.len() == 2
        ));
    }

    #[test]
    fn test_numbers_and_text() {
        let record = normalize(json!({ "episode_id": 4, "director": "George Lucas" }));
        assert_eq!(record.get("episode_id"), Some(&FieldValue::Number(4.0)));
        assert_eq!(
            record.get("director"),
            Some(&FieldValue::Text("George Lucas".to_string()))
        );
    }

    #[test]
    fn test_field_order_preserved() {
        let record = normalize(json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77"
        }));
        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["name", "height", "mass"]);
    }

    #[test]
    fn test_nested_object_rejected() {
        let result = ResourceRecord::from_json(
            json!({ "name": { "first": "Luke" } }),
            &LinkTable::default(),
        );
        assert!(matches!(result, Err(CoreError::InvalidRecord(_))));
    }

    #[test]
    fn test_non_object_rejected() {
        let result = ResourceRecord::from_json(json!([1, 2, 3]), &LinkTable::default());
        assert!(matches!(result, Err(CoreError::InvalidRecord(_))));
    }

    #[test]
    fn test_number_text() {
        assert_eq!(FieldValue::number_text(4.0), "4");
        assert_eq!(FieldValue::number_text(1.5), "1.5");
    }
}
