//! Recursive descent plus the crate's two public entry points.
//!
//! Grounded on `validator::JSONSchema`'s role as the top-level façade, but
//! reshaped from a "compile once into a tree of boxed validators, then run
//! the tree" pipeline into a direct recursive interpreter over the raw
//! schema `Value`: this draft's keyword set must run in a fixed, observable
//! per-call order (see `keywords::validate_all`), and trial validation for
//! `type`/`disallow` needs to distinguish "the instance doesn't match" from
//! "the schema itself is broken" rather than treat every failure the same
//! way a single boxed `Validate::validate` return value would. See
//! DESIGN.md for the full rationale.
use crate::context::Context;
use crate::digest;
use crate::error::{Error, SchemaError};
use crate::graph;
use crate::keywords;
use crate::loader::SchemaLoader;
use crate::options::ValidationOptions;
use crate::paths::Path;
use crate::registry::Registry;
use lazy_static::lazy_static;
use serde_json::{json, Value};
use std::sync::Arc;
use url::Url;

lazy_static! {
    /// Schemas fetched by the default loader persist here across calls when
    /// `ValidationOptions::with_cache_persistence(true)` is set, so repeated
    /// validation against the same externally-referenced schema does not
    /// refetch it every time.
    static ref EXTERNAL_CACHE: Registry = Registry::new();
}

/// How a schema document was handed to the crate, prior to normalization
/// into (parsed value, resolution scope).
pub enum SchemaSource<'a> {
    /// Already-parsed schema content.
    Value(Value),
    /// Unparsed schema text.
    Text(&'a str),
    /// A URI the schema document should be fetched from.
    Uri(&'a str),
}

impl<'a> From<Value> for SchemaSource<'a> {
    fn from(value: Value) -> Self {
        SchemaSource::Value(value)
    }
}

pub(crate) fn normalize(source: SchemaSource<'_>, loader: &dyn SchemaLoader) -> Result<(Value, Url), Error> {
    match source {
        SchemaSource::Value(value) => {
            let uri = digest::synthetic_uri(&value);
            Ok((value, uri))
        }
        SchemaSource::Text(text) => {
            let value: Value = serde_json::from_str(text)
                .map_err(|err| SchemaError::new(format!("invalid schema text: {}", err), &Path::new().to_pointer()))?;
            let uri = digest::synthetic_uri(&value);
            Ok((value, uri))
        }
        SchemaSource::Uri(uri) => {
            let cwd = std::env::current_dir()
                .ok()
                .and_then(|dir| Url::from_directory_path(dir).ok())
                .unwrap_or_else(|| Url::parse("file:///").expect("valid fallback URI"));
            let url = cwd
                .join(uri)
                .map_err(|_| SchemaError::new(format!("invalid schema URI: {}", uri), &Path::new().to_pointer()))?;
            let document = loader
                .load(&url)
                .map_err(|err| SchemaError::new(format!("could not load schema '{}': {}", uri, err), &Path::new().to_pointer()))?;
            Ok((document, url))
        }
    }
}

/// Recursively validate `instance` against the already-resolved schema
/// node `schema`, re-running every keyword's guard in the fixed order.
pub(crate) fn validate_node(schema: &Value, instance: &Value, ctx: &Context) -> Result<(), Error> {
    match schema {
        Value::Object(object) => {
            let rebased = ctx.scoped(schema);
            keywords::validate_all(object, instance, &rebased)
        }
        // Draft 3 schemas are always a Mapping (spec §3); boolean schema
        // nodes are a Draft 6+ feature this draft doesn't have, so they fall
        // through to the same schema error as any other non-Mapping node.
        _ => Err(SchemaError::not_an_object(&ctx.schema_path.to_pointer()).into()),
    }
}

/// Validate `instance` against `schema`, returning the first violation
/// encountered in keyword order, or the first broken schema reference
/// actually exercised along the way.
pub fn validate_strict(schema: SchemaSource<'_>, instance: &Value, options: &ValidationOptions) -> Result<(), Error> {
    let (document, base) = normalize(schema, options.loader.as_ref())?;

    // Every call gets its own registry so concurrent validations never race
    // over a shared one. `cache_persistence` only governs whether documents
    // fetched through the loader are seeded in from, and then folded back
    // into, the process-wide `EXTERNAL_CACHE` once this call is done.
    let registry = Registry::new();
    if options.cache_persistence {
        for (key, value) in EXTERNAL_CACHE.snapshot() {
            registry.insert_if_absent(key, value);
        }
    }

    // Register and walk the schema as the caller supplied it, before any
    // `list` wrapping, so a `$ref` back to `base` from inside the wrapper
    // resolves to the real document rather than to the wrapper itself.
    let mut key = base.clone();
    key.set_fragment(None);
    registry.insert_if_absent(key.to_string(), Arc::new(document.clone()));
    graph::walk(&document, &base, &registry, options.loader.as_ref());

    let top_level = if options.list {
        json!({"type": "array", "items": {"$ref": base.to_string()}})
    } else {
        document
    };

    let path = Path::new();
    let schema_path = Path::new();
    let ctx = Context::new(&registry, options.loader.as_ref(), &path, &schema_path, base);
    let result = validate_node(&top_level, instance, &ctx);

    if options.cache_persistence {
        for (key, value) in registry.snapshot() {
            EXTERNAL_CACHE.insert_if_absent(key, value);
        }
    }
    result
}

/// Validate `instance` against `schema`, collapsing every failure mode
/// (instance violation or broken schema reference) into `false`.
pub fn validate(schema: SchemaSource<'_>, instance: &Value, options: &ValidationOptions) -> bool {
    validate_strict(schema, instance, options).is_ok()
}
