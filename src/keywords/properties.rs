//! `properties`: per-property subschemas, with Draft 3's own `required: true`
//! boolean living on the subschema rather than in a sibling array.
use crate::context::Context;
use crate::engine;
use crate::error::{violation, KeywordResult};
use crate::paths::PathGuard;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let properties = match object.get("properties").and_then(Value::as_object) {
        Some(properties) => properties,
        None => return Ok(()),
    };
    let instance_object = match instance.as_object() {
        Some(instance_object) => instance_object,
        None => return Ok(()),
    };

    let _scope = PathGuard::push(ctx.schema_path, "properties");
    for (name, subschema) in properties {
        let required = subschema
            .as_object()
            .and_then(|sub| sub.get("required"))
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let _schema_segment = PathGuard::push(ctx.schema_path, name.as_str());
        match instance_object.get(name) {
            Some(value) => {
                let _path_segment = PathGuard::push(ctx.path, name.as_str());
                engine::validate_node(subschema, value, ctx)?;
            }
            None if required => {
                return Err(violation(
                    format!("'{}' is a required property", name),
                    &ctx.path.to_pointer(),
                    &ctx.schema_path.to_pointer(),
                ));
            }
            None => {}
        }
    }
    Ok(())
}
