//! `uniqueItems`.
use crate::context::Context;
use crate::error::{violation, KeywordResult};
use crate::value_ops::all_unique;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let items = match (object.get("uniqueItems").and_then(Value::as_bool), instance.as_array()) {
        (Some(true), Some(items)) => items,
        _ => return Ok(()),
    };
    if all_unique(items) {
        Ok(())
    } else {
        Err(violation(
            "array elements are not all unique",
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
