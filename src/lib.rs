//! # jsonschema3
//!
//! A validator for JSON Schema Draft 3 structured documents: value model,
//! schema graph construction with identifier-based indexing, `$ref`
//! resolution (including on-demand external loading), and recursive
//! structural validation of `properties`, `patternProperties`,
//! `additionalProperties`, `items`, `additionalItems`, `dependencies` and
//! `extends`, evaluated over the exact keyword order this draft specifies.
//!
//! ## Example:
//!
//! ```rust
//! use jsonschema3::{validate, SchemaSource, ValidationOptions};
//! use serde_json::json;
//!
//! let schema = json!({"maxLength": 5});
//! let instance = json!("foo");
//! let options = ValidationOptions::new();
//! assert!(validate(SchemaSource::Value(schema), &instance, &options));
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::trivially_copy_pass_by_ref,
    clippy::needless_pass_by_value,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
mod context;
mod digest;
mod engine;
mod error;
mod graph;
mod keywords;
mod loader;
mod options;
mod paths;
mod primitive_type;
mod registry;
mod resolver;
mod schemas;
mod validator;
mod value_ops;

pub use engine::{validate, validate_strict, SchemaSource};
pub use error::{Error, SchemaError, ValidationError};
pub use loader::{DefaultLoader, SchemaLoader};
pub use options::ValidationOptions;
pub use paths::JSONPointer;
pub use validator::Validator;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_instance_passes() {
        let schema = json!({"minLength": 3});
        let options = ValidationOptions::new();
        assert!(validate(SchemaSource::Value(schema), &json!("foobar"), &options));
    }

    #[test]
    fn invalid_instance_fails() {
        let schema = json!({"minLength": 3});
        let options = ValidationOptions::new();
        assert!(!validate(SchemaSource::Value(schema), &json!("fo"), &options));
    }

    #[test]
    fn validate_strict_reports_the_failing_keyword_path() {
        let schema = json!({"properties": {"name": {"type": "string", "required": true}}});
        let instance = json!({});
        let options = ValidationOptions::new();
        let err = validate_strict(SchemaSource::Value(schema), &instance, &options).unwrap_err();
        match err {
            Error::Validation(validation_error) => {
                assert!(validation_error.to_string().contains("required"));
            }
            Error::Schema(schema_error) => panic!("expected a validation error, got {}", schema_error),
        }
    }
}
