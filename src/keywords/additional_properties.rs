//! `additionalProperties`: governs instance properties not claimed by
//! `properties` or `patternProperties`.
use crate::context::Context;
use crate::engine;
use crate::error::{violation, KeywordResult};
use crate::paths::PathGuard;
use regex::Regex;
use serde_json::{Map, Value};

fn is_extra(name: &str, object: &Map<String, Value>) -> bool {
    if let Some(properties) = object.get("properties").and_then(Value::as_object) {
        if properties.contains_key(name) {
            return false;
        }
    }
    if let Some(pattern_properties) = object.get("patternProperties").and_then(Value::as_object) {
        for pattern in pattern_properties.keys() {
            if let Ok(regex) = Regex::new(pattern) {
                if regex.is_match(name) {
                    return false;
                }
            }
        }
    }
    true
}

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let additional = match object.get("additionalProperties") {
        Some(additional) => additional,
        None => return Ok(()),
    };
    let instance_object = match instance.as_object() {
        Some(instance_object) => instance_object,
        None => return Ok(()),
    };

    let extras: Vec<&String> = instance_object
        .keys()
        .filter(|name| is_extra(name, object))
        .collect();
    if extras.is_empty() {
        return Ok(());
    }

    match additional {
        Value::Bool(false) => Err(violation(
            format!("additional properties are not allowed ({})", extras.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        )),
        Value::Bool(true) => Ok(()),
        subschema @ Value::Object(_) => {
            let _scope = PathGuard::push(ctx.schema_path, "additionalProperties");
            for name in extras {
                let _path_segment = PathGuard::push(ctx.path, name.as_str());
                engine::validate_node(subschema, &instance_object[name.as_str()], ctx)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
