//! `minItems`.
use crate::context::Context;
use crate::error::{violation, KeywordResult};
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let (limit, items) = match (object.get("minItems").and_then(Value::as_u64), instance.as_array()) {
        (Some(limit), Some(items)) => (limit, items),
        _ => return Ok(()),
    };
    if items.len() as u64 >= limit {
        Ok(())
    } else {
        Err(violation(
            format!("array has {} items, fewer than the minimum of {}", items.len(), limit),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
