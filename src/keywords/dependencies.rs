//! `dependencies`: presence of a property can require another property
//! (string/array form) or require the whole instance to satisfy a subschema
//! (schema form).
use crate::context::Context;
use crate::engine;
use crate::error::{violation, KeywordResult};
use crate::paths::PathGuard;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let dependencies = match object.get("dependencies").and_then(Value::as_object) {
        Some(dependencies) => dependencies,
        None => return Ok(()),
    };
    let instance_object = match instance.as_object() {
        Some(instance_object) => instance_object,
        None => return Ok(()),
    };

    let _scope = PathGuard::push(ctx.schema_path, "dependencies");
    for (name, dependency) in dependencies {
        if !instance_object.contains_key(name) {
            continue;
        }
        let _schema_segment = PathGuard::push(ctx.schema_path, name.as_str());
        match dependency {
            Value::String(required) => require(required, instance_object, name, ctx)?,
            Value::Array(required) => {
                for item in required {
                    if let Some(required) = item.as_str() {
                        require(required, instance_object, name, ctx)?;
                    }
                }
            }
            subschema @ Value::Object(_) => {
                engine::validate_node(subschema, instance, ctx)?;
            }
            _ => {}
        }
    }
    Ok(())
}

fn require(required: &str, instance_object: &Map<String, Value>, owner: &str, ctx: &Context) -> KeywordResult {
    if instance_object.contains_key(required) {
        Ok(())
    } else {
        Err(violation(
            format!("'{}' requires property '{}' to also be present", owner, required),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
