//! Shared union-trial machinery for `type` and `disallow`.
//!
//! Both keywords accept either a single declaration or a sequence of them,
//! where a declaration names a primitive class or embeds a subschema. Spec
//! §4.3 requires this to be a genuine trial: validating the instance against
//! each embedded subschema and treating only [`ValidationError`] as "does not
//! match" — a [`SchemaError`] encountered along the way (a broken `$ref`
//! inside one of the union's alternatives) is a real defect and must still
//! propagate, not be swallowed as a failed match.
use crate::context::Context;
use crate::engine;
use crate::error::Error;
use crate::primitive_type::{self, PrimitiveType};
use serde_json::Value;
use std::convert::TryFrom;

pub(crate) enum Declaration<'a> {
    Primitive(PrimitiveType),
    Schema(&'a Value),
}

pub(crate) fn parse(value: &Value) -> Vec<Declaration<'_>> {
    match value {
        Value::String(name) => vec![Declaration::Primitive(
            PrimitiveType::try_from(name.as_str()).unwrap_or(PrimitiveType::Any),
        )],
        Value::Object(_) => vec![Declaration::Schema(value)],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(Declaration::Primitive(
                    PrimitiveType::try_from(name.as_str()).unwrap_or(PrimitiveType::Any),
                )),
                Value::Object(_) => Some(Declaration::Schema(item)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn matches(declaration: &Declaration, instance: &Value, ctx: &Context) -> Result<bool, Error> {
    match declaration {
        Declaration::Primitive(primitive) => Ok(primitive_type::matches(*primitive, instance)),
        Declaration::Schema(schema) => match engine::validate_node(schema, instance, ctx) {
            Ok(()) => Ok(true),
            Err(Error::Validation(_)) => Ok(false),
            Err(schema_err @ Error::Schema(_)) => Err(schema_err),
        },
    }
}

pub(crate) fn any_matches(declarations: &[Declaration], instance: &Value, ctx: &Context) -> Result<bool, Error> {
    for declaration in declarations {
        if matches(declaration, instance, ctx)? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn describe(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|declaration| match declaration {
            Declaration::Primitive(primitive) => primitive.to_string(),
            Declaration::Schema(_) => "a matching schema".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
