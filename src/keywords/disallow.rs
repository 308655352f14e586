//! `disallow`: the complement of `type` — the instance must match none of
//! the declared classes or subschemas.
use super::type_support::{any_matches, describe, parse};
use crate::context::Context;
use crate::error::{quote, violation, KeywordResult};
use serde_json::Map;
use serde_json::Value;

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let value = match object.get("disallow") {
        Some(value) => value,
        None => return Ok(()),
    };
    let declarations = parse(value);
    if any_matches(&declarations, instance, ctx)? {
        Err(violation(
            format!("{} is disallowed by type {}", quote(instance), describe(&declarations)),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    } else {
        Ok(())
    }
}
