//! `type`: the instance must match at least one declared class or subschema.
use super::type_support::{any_matches, describe, parse};
use crate::context::Context;
use crate::error::{quote, violation, KeywordResult};
use serde_json::Map;
use serde_json::Value;

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let value = match object.get("type") {
        Some(value) => value,
        None => return Ok(()),
    };
    let declarations = parse(value);
    if any_matches(&declarations, instance, ctx)? {
        Ok(())
    } else {
        Err(violation(
            format!("{} is not of type {}", quote(instance), describe(&declarations)),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
