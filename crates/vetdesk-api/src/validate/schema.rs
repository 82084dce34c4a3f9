//! The schema walker: ordered field rules over an untyped JSON payload.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;
use validator::ValidateEmail;

/// A single violated field with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The offending payload field (or `body` for whole-payload errors).
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldType {
    Str,
    Number,
    StrArray,
}

impl FieldType {
    fn describe(self) -> &'static str {
        match self {
            Self::Str => "a string",
            Self::Number => "a number",
            Self::StrArray => "an array of strings",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::Str => value.is_string(),
            Self::Number => value.is_number(),
            Self::StrArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }
}

/// A constraint applied after the type check passes.
#[derive(Debug, Clone)]
enum Check {
    Email,
    MinLen(usize),
    Min(i64),
    Max(i64),
    Int,
    NonEmpty,
    OneOf(&'static [&'static str]),
    Date,
    Time,
    Uuid,
}

impl Check {
    fn passes(&self, value: &Value) -> bool {
        match self {
            Self::Email => value.as_str().is_some_and(|s| s.validate_email()),
            Self::MinLen(n) => value.as_str().is_some_and(|s| s.chars().count() >= *n),
            Self::Min(n) => value.as_f64().is_some_and(|v| v >= *n as f64),
            Self::Max(n) => value.as_f64().is_some_and(|v| v <= *n as f64),
            Self::Int => value.as_i64().is_some() || value.as_u64().is_some(),
            Self::NonEmpty => value.as_array().is_some_and(|items| !items.is_empty()),
            Self::OneOf(allowed) => value.as_array().is_some_and(|items| {
                items
                    .iter()
                    .all(|item| item.as_str().is_some_and(|s| allowed.contains(&s)))
            }),
            Self::Date => value
                .as_str()
                .is_some_and(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()),
            Self::Time => value
                .as_str()
                .is_some_and(|s| NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok()),
            Self::Uuid => value.as_str().is_some_and(|s| Uuid::parse_str(s).is_ok()),
        }
    }
}

/// One declared field: name, type, and ordered constraints.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    ty: FieldType,
    optional: bool,
    checks: Vec<(Check, &'static str)>,
}

impl Field {
    fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            optional: false,
            checks: Vec::new(),
        }
    }

    /// Declares a string field.
    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::Str)
    }

    /// Declares a numeric field.
    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number)
    }

    /// Declares an array-of-strings field.
    pub fn string_array(name: &'static str) -> Self {
        Self::new(name, FieldType::StrArray)
    }

    /// Marks the field as optional: absence is not an error, but a present
    /// value still has to satisfy every constraint.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Requires a valid email address.
    pub fn email(self, message: &'static str) -> Self {
        self.check(Check::Email, message)
    }

    /// Requires a minimum number of characters.
    pub fn min_len(self, len: usize, message: &'static str) -> Self {
        self.check(Check::MinLen(len), message)
    }

    /// Requires the number to be at least `min`.
    pub fn min(self, min: i64, message: &'static str) -> Self {
        self.check(Check::Min(min), message)
    }

    /// Requires the number to be at most `max`.
    pub fn max(self, max: i64, message: &'static str) -> Self {
        self.check(Check::Max(max), message)
    }

    /// Requires the number to be an integer.
    pub fn int(self, message: &'static str) -> Self {
        self.check(Check::Int, message)
    }

    /// Requires the array to have at least one element.
    pub fn non_empty(self, message: &'static str) -> Self {
        self.check(Check::NonEmpty, message)
    }

    /// Requires every string element to be one of the allowed names.
    pub fn one_of(self, allowed: &'static [&'static str], message: &'static str) -> Self {
        self.check(Check::OneOf(allowed), message)
    }

    /// Requires a `YYYY-MM-DD` calendar date.
    pub fn date(self, message: &'static str) -> Self {
        self.check(Check::Date, message)
    }

    /// Requires a `HH:MM:SS` time of day.
    pub fn time(self, message: &'static str) -> Self {
        self.check(Check::Time, message)
    }

    /// Requires a UUID string.
    pub fn uuid(self, message: &'static str) -> Self {
        self.check(Check::Uuid, message)
    }

    fn check(mut self, check: Check, message: &'static str) -> Self {
        self.checks.push((check, message));
        self
    }

    fn required_message(&self) -> String {
        format!("{} is required", title(self.name))
    }

    fn type_message(&self) -> String {
        format!("{} must be {}", title(self.name), self.ty.describe())
    }
}

/// Turns a snake_case field name into a sentence subject: `owner_id` →
/// `Owner id`.
fn title(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

/// A declared request shape: ordered fields, optionally strict.
///
/// Schemas are immutable once built and are defined once per endpoint shape
/// (see [`super::shapes`]).
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<Field>,
    strict: bool,
}

impl Schema {
    /// Builds a schema from ordered field declarations.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            strict: false,
        }
    }

    /// Enables strict mode: payload keys not declared here are errors.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Validates a payload, accumulating every violation.
    ///
    /// Errors appear in field declaration order; unexpected-key errors (in
    /// strict mode) follow them. This never short-circuits on the first
    /// failure.
    pub fn validate(&self, payload: &Value) -> Result<(), Vec<FieldError>> {
        let Some(object) = payload.as_object() else {
            return Err(vec![FieldError::new("body", "Payload must be a JSON object")]);
        };

        let mut errors = Vec::new();

        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if !field.optional {
                        errors.push(FieldError::new(field.name, field.required_message()));
                    }
                }
                Some(value) => {
                    if !field.ty.matches(value) {
                        errors.push(FieldError::new(field.name, field.type_message()));
                        continue;
                    }
                    for (check, message) in &field.checks {
                        if !check.passes(value) {
                            errors.push(FieldError::new(field.name, *message));
                        }
                    }
                }
            }
        }

        if self.strict {
            for key in object.keys() {
                if !self.fields.iter().any(|field| field.name == key.as_str()) {
                    errors.push(FieldError::new(key.clone(), "Unexpected field"));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
