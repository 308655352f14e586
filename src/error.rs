//! Error types.
//!
//! Modeled on `jsonschema-rs`'s `error.rs`: one constructor function per
//! violation kind instead of a single stringly-typed message, so
//! `Display::fmt` can render a precise, keyword-specific sentence.
use crate::paths::JSONPointer;
use serde_json::Value;
use std::{error, fmt};

/// The instance violates the schema it was validated against.
///
/// Carries the accumulated instance path and the schema path that produced
/// the failure, per spec §7's `(message, path, schema)` triple. `schema`
/// here is the schema path (as a pointer into the schema document) rather
/// than a clone of the schema value itself, mirroring how the teacher
/// crate's own `ValidationError` threads a `schema_path` alongside the
/// failing keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    message: String,
    /// Pointer into the instance where the violation was observed.
    pub path: JSONPointer,
    /// Pointer into the schema for the keyword that raised the violation.
    pub schema_path: JSONPointer,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>, path: &JSONPointer, schema_path: &JSONPointer) -> Self {
        ValidationError {
            message: message.into(),
            path: path.clone(),
            schema_path: schema_path.clone(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.path)
    }
}

impl error::Error for ValidationError {}

/// The schema itself is structurally defective.
///
/// Currently only raised by `$ref` fragment navigation when a path segment
/// names a non-existent node (spec §4.3 `$ref`, §7). Unlike `ValidationError`
/// this always terminates validation; `validate()`'s boolean form still
/// propagates it rather than converting it to `false` (spec §7).
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    message: String,
    pub schema_path: JSONPointer,
}

impl SchemaError {
    pub(crate) fn new(message: impl Into<String>, schema_path: &JSONPointer) -> Self {
        SchemaError {
            message: message.into(),
            schema_path: schema_path.clone(),
        }
    }

    pub(crate) fn broken_reference(reference: &str, schema_path: &JSONPointer) -> Self {
        SchemaError::new(format!("broken reference: {}", reference), schema_path)
    }

    pub(crate) fn not_an_object(schema_path: &JSONPointer) -> Self {
        SchemaError::new("schema node is not an object", schema_path)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.schema_path)
    }
}

impl error::Error for SchemaError {}

/// The union of everything `validate_strict` can fail with.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Validation(ValidationError),
    Schema(SchemaError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(e) => e.fmt(f),
            Error::Schema(e) => e.fmt(f),
        }
    }
}

impl error::Error for Error {}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<SchemaError> for Error {
    fn from(e: SchemaError) -> Self {
        Error::Schema(e)
    }
}

/// Internal control-flow result for a single keyword check or recursive
/// descent: `Ok(())` means "this keyword raised no violation", distinct from
/// the public `Error` union so `$ref`'s `SchemaError` can propagate through
/// `?` without every keyword validator needing to know about it.
pub(crate) type KeywordResult = Result<(), Error>;

/// Shortcut for building a [`ValidationError`] wrapped in [`Error`].
pub(crate) fn violation(message: impl Into<String>, path: &JSONPointer, schema_path: &JSONPointer) -> Error {
    Error::Validation(ValidationError::new(message, path, schema_path))
}

pub(crate) fn quote(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::JSONPointer;

    #[test]
    fn validation_error_renders_message_and_path() {
        let path = JSONPointer::default();
        let err = ValidationError::new("'taco' is not of type 'integer'", &path, &path);
        assert_eq!(err.to_string(), "'taco' is not of type 'integer' at #/");
    }

    #[test]
    fn schema_error_is_distinct_from_validation_error() {
        let path = JSONPointer::default();
        let schema_err: Error = SchemaError::broken_reference("#/definitions/missing", &path).into();
        match schema_err {
            Error::Schema(_) => {}
            Error::Validation(_) => panic!("expected a schema error"),
        }
    }
}
