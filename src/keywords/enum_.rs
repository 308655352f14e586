//! `enum`: the instance must deep-equal one of the listed values.
use crate::context::Context;
use crate::error::{quote, violation, KeywordResult};
use crate::value_ops::equal;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let values = match object.get("enum").and_then(Value::as_array) {
        Some(values) => values,
        None => return Ok(()),
    };
    if values.iter().any(|value| equal(value, instance)) {
        Ok(())
    } else {
        Err(violation(
            format!("{} is not one of the enumerated values", quote(instance)),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
