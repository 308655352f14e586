//! `patternProperties`: subschemas keyed by a regular expression matched
//! against property names (unanchored, same as `pattern`).
use crate::context::Context;
use crate::engine;
use crate::error::KeywordResult;
use crate::paths::PathGuard;
use regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let pattern_properties = match object.get("patternProperties").and_then(Value::as_object) {
        Some(pattern_properties) => pattern_properties,
        None => return Ok(()),
    };
    let instance_object = match instance.as_object() {
        Some(instance_object) => instance_object,
        None => return Ok(()),
    };

    let _scope = PathGuard::push(ctx.schema_path, "patternProperties");
    for (pattern, subschema) in pattern_properties {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(_) => continue,
        };
        let _schema_segment = PathGuard::push(ctx.schema_path, pattern.as_str());
        for (name, value) in instance_object {
            if regex.is_match(name) {
                let _path_segment = PathGuard::push(ctx.path, name.as_str());
                engine::validate_node(subschema, value, ctx)?;
            }
        }
    }
    Ok(())
}
