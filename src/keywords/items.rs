//! `items`: either a single subschema applied to every element, or a
//! sequence of subschemas applied positionally (tuple typing).
use crate::context::Context;
use crate::engine;
use crate::error::KeywordResult;
use crate::paths::PathGuard;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let items_schema = match object.get("items") {
        Some(items_schema) => items_schema,
        None => return Ok(()),
    };
    let instance_items = match instance.as_array() {
        Some(instance_items) => instance_items,
        None => return Ok(()),
    };

    match items_schema {
        Value::Object(_) => {
            let _scope = PathGuard::push(ctx.schema_path, "items");
            for (index, item) in instance_items.iter().enumerate() {
                let _path_segment = PathGuard::push(ctx.path, index);
                engine::validate_node(items_schema, item, ctx)?;
            }
            Ok(())
        }
        Value::Array(schemas) => {
            let _scope = PathGuard::push(ctx.schema_path, "items");
            for (index, (subschema, item)) in schemas.iter().zip(instance_items.iter()).enumerate() {
                let _schema_segment = PathGuard::push(ctx.schema_path, index);
                let _path_segment = PathGuard::push(ctx.path, index);
                engine::validate_node(subschema, item, ctx)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
