//! `maxLength`, counted in Unicode code points.
use crate::context::Context;
use crate::error::{quote, violation, KeywordResult};
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let (limit, text) = match (object.get("maxLength").and_then(Value::as_u64), instance.as_str()) {
        (Some(limit), Some(text)) => (limit, text),
        _ => return Ok(()),
    };
    if text.chars().count() as u64 <= limit {
        Ok(())
    } else {
        Err(violation(
            format!("{} is longer than the maximum length of {}", quote(instance), limit),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
