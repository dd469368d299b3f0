//! Request profile: presence checks and normalization of the four input fields.
//!
//! Presence runs first, over the raw JSON, so a missing field is always a
//! validation error. Type problems on a present field are faults.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::recommendation::catalog::WILDCARD_MANUFACTURER;

pub const MISSING_FIELDS_MESSAGE: &str =
    "Semua field (umur, gaya, pekerjaan, produsen) harus diisi";

const REQUIRED_FIELDS: &[&str] = &["umur", "gaya", "pekerjaan", "manufacturer"];

/// A validated, normalized request profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Age rendered as display text.
    pub age: String,
    /// Lowercased style, used as the secondary lookup key.
    pub style: String,
    /// Capitalized occupation, display only.
    pub occupation: String,
    /// Lowercased manufacturer, used as the primary lookup key.
    pub manufacturer: String,
}

impl Profile {
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let fields = body
            .as_object()
            .ok_or_else(|| AppError::Fault("request body must be a JSON object".to_string()))?;

        if !REQUIRED_FIELDS
            .iter()
            .all(|field| is_truthy(fields.get(*field)))
        {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        let age = fields
            .get("umur")
            .map(render_age)
            .unwrap_or_default();

        Ok(Self {
            age,
            style: required_str(fields, "gaya")?.to_lowercase(),
            occupation: capitalize(required_str(fields, "pekerjaan")?),
            manufacturer: required_str(fields, "manufacturer")?.to_lowercase(),
        })
    }

    pub fn is_wildcard(&self) -> bool {
        self.manufacturer == WILDCARD_MANUFACTURER
    }

    /// Manufacturer as shown to the user, e.g. "tesla" → "Tesla".
    pub fn manufacturer_label(&self) -> String {
        capitalize(&self.manufacturer)
    }
}

/// Falsy: absent, null, false, zero, "", [] and {}.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn render_age(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn required_str<'a>(fields: &'a Map<String, Value>, field: &str) -> Result<&'a str, AppError> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Fault(format!("field '{field}' must be a string")))
}
