//! `$ref`: delegate validation entirely to the referenced schema node.
//!
//! Runs last in the fixed keyword order (spec §4.3): a schema that combines
//! `$ref` with other keywords still runs every earlier keyword against the
//! local schema object first, and only then follows the reference.
use crate::context::Context;
use crate::engine;
use crate::error::KeywordResult;
use crate::resolver;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let reference = match object.get("$ref").and_then(Value::as_str) {
        Some(reference) => reference,
        None => return Ok(()),
    };
    let (resolved, base) = resolver::resolve(reference, ctx)?;
    let child_ctx = Context::new(ctx.registry, ctx.loader, ctx.path, ctx.schema_path, base);
    engine::validate_node(&resolved, instance, &child_ctx)
}
