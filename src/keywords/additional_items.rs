//! `additionalItems`: governs instance elements beyond the positional
//! schemas declared by an array-form `items`. Meaningless when `items` is a
//! single subschema, since there is no fixed prefix in that case.
use crate::context::Context;
use crate::engine;
use crate::error::{violation, KeywordResult};
use crate::paths::PathGuard;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let additional = match object.get("additionalItems") {
        Some(additional) => additional,
        None => return Ok(()),
    };
    let prefix_len = match object.get("items").and_then(Value::as_array) {
        Some(schemas) => schemas.len(),
        None => return Ok(()),
    };
    let instance_items = match instance.as_array() {
        Some(instance_items) => instance_items,
        None => return Ok(()),
    };
    if instance_items.len() <= prefix_len {
        return Ok(());
    }

    match additional {
        Value::Bool(false) => Err(violation(
            format!(
                "array has {} items, more than the {} allowed by additionalItems",
                instance_items.len(),
                prefix_len
            ),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        )),
        Value::Bool(true) => Ok(()),
        subschema @ Value::Object(_) => {
            let _scope = PathGuard::push(ctx.schema_path, "additionalItems");
            for (index, item) in instance_items.iter().enumerate().skip(prefix_len) {
                let _path_segment = PathGuard::push(ctx.path, index);
                engine::validate_node(subschema, item, ctx)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
