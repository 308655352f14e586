//! `extends`: the instance must also satisfy one or more base subschemas.
use crate::context::Context;
use crate::engine;
use crate::error::KeywordResult;
use crate::paths::PathGuard;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let extends = match object.get("extends") {
        Some(extends) => extends,
        None => return Ok(()),
    };

    let _scope = PathGuard::push(ctx.schema_path, "extends");
    match extends {
        Value::Object(_) => engine::validate_node(extends, instance, ctx),
        Value::Array(schemas) => {
            for (index, subschema) in schemas.iter().enumerate() {
                let _schema_segment = PathGuard::push(ctx.schema_path, index);
                engine::validate_node(subschema, instance, ctx)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
