//! `minimum` / `exclusiveMinimum`.
use crate::context::Context;
use crate::error::{quote, violation, KeywordResult};
use crate::value_ops::{num_ge, num_gt};
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let (limit, instance_value) = match (object.get("minimum"), instance) {
        (Some(Value::Number(limit)), Value::Number(instance_value)) => (limit, instance_value),
        _ => return Ok(()),
    };
    let exclusive = object.get("exclusiveMinimum").and_then(Value::as_bool).unwrap_or(false);
    let ok = if exclusive {
        num_gt(instance_value, limit)
    } else {
        num_ge(instance_value, limit)
    };
    if ok {
        Ok(())
    } else {
        Err(violation(
            format!("{} is less than the minimum of {}", quote(instance), limit),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{validate, SchemaSource};
    use crate::options::ValidationOptions;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"minimum": 1u64 << 54}), json!((1u64 << 54) - 1))]
    #[test_case(json!({"minimum": 1i64 << 54}), json!((1i64 << 54) - 1))]
    fn is_not_valid(schema: Value, instance: Value) {
        assert!(!validate(SchemaSource::Value(schema), &instance, &ValidationOptions::new()));
    }

    #[test_case(json!({"minimum": 1u64 << 54}), json!(1u64 << 54))]
    #[test_case(json!({"minimum": 1u64 << 54, "exclusiveMinimum": true}), json!((1u64 << 54) + 1))]
    fn is_valid(schema: Value, instance: Value) {
        assert!(validate(SchemaSource::Value(schema), &instance, &ValidationOptions::new()));
    }
}
