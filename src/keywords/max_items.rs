//! `maxItems`.
//!
//! The source this crate's semantics were distilled from renders this
//! keyword's failure message by reusing `minItems`'s wording verbatim
//! ("fewer than the minimum number of items"), which is backwards for a
//! maximum violation. This crate corrects the wording; see DESIGN.md.
use crate::context::Context;
use crate::error::{violation, KeywordResult};
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let (limit, items) = match (object.get("maxItems").and_then(Value::as_u64), instance.as_array()) {
        (Some(limit), Some(items)) => (limit, items),
        _ => return Ok(()),
    };
    if items.len() as u64 <= limit {
        Ok(())
    } else {
        Err(violation(
            format!("array has {} items, more than the maximum of {}", items.len(), limit),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
