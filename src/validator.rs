//! Stateful facade matching spec §6: an engine instance that owns a schema
//! registry across calls, exposing `add_schema`/`schemas`/
//! `set_cache_persistence`/`clear_cache` alongside `validate`/`validate_strict`.
//!
//! Grounded on the teacher's `validator::JSONSchema`, generalized from a
//! single "compile once against one schema" object into one that can
//! register many schema documents over its lifetime and answer `schemas()`
//! queries against them — the part of spec §6 the free
//! [`crate::validate`]/[`crate::validate_strict`] functions deliberately
//! don't expose, since each of those calls gets its own private, disposable
//! registry (see `engine.rs`).
use crate::context::Context;
use crate::engine::{self, validate_node, SchemaSource};
use crate::error::Error;
use crate::graph;
use crate::loader::{DefaultLoader, SchemaLoader};
use crate::options::ValidationOptions;
use crate::paths::Path;
use crate::registry::Registry;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// An engine instance that owns a schema registry across calls.
///
/// Unlike the free functions, which give every call a fresh, private
/// registry so independent validations never race over shared state, a
/// `Validator` keeps whatever has been registered on it — via
/// [`Validator::add_schema`] or via a previous [`Validator::validate`]
/// call's own eager graph walk — until [`Validator::clear_cache`] empties
/// it. This mirrors spec §6's `schemas()`/`add_schema()`/
/// `set_cache_persistence()`/`clear_cache()` surface.
pub struct Validator {
    registry: Registry,
    cache_persistence: AtomicBool,
    loader: Arc<dyn SchemaLoader>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("cache_persistence", &self.cache_persistence.load(Ordering::SeqCst))
            .finish()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Validator {
            registry: Registry::new(),
            cache_persistence: AtomicBool::new(false),
            loader: Arc::new(DefaultLoader::new()),
        }
    }
}

impl Validator {
    pub fn new() -> Self {
        Validator::default()
    }

    /// Build a `Validator` that fetches external references through
    /// `loader` instead of [`DefaultLoader`].
    pub fn with_loader(loader: impl SchemaLoader + 'static) -> Self {
        Validator {
            loader: Arc::new(loader),
            ..Validator::default()
        }
    }

    /// Register `schema` under its own URI (assigning a synthetic one if it
    /// doesn't carry one) and eagerly walk its graph, per spec §4.2.
    /// Idempotent: a schema already registered under the same URI is left
    /// untouched, matching the registry's first-writer-wins discipline
    /// (spec §3).
    pub fn add_schema(&self, schema: SchemaSource<'_>) -> Result<(), Error> {
        let (document, base) = engine::normalize(schema, self.loader.as_ref())?;
        let mut key = base.clone();
        key.set_fragment(None);
        self.registry.insert_if_absent(key.to_string(), Arc::new(document.clone()));
        graph::walk(&document, &base, &self.registry, self.loader.as_ref());
        Ok(())
    }

    /// A read-only snapshot of every schema currently registered, keyed by
    /// its absolute URI with the fragment stripped (spec §6).
    pub fn schemas(&self) -> HashMap<String, Value> {
        self.registry
            .snapshot()
            .into_iter()
            .map(|(key, value)| (key, (*value).clone()))
            .collect()
    }

    /// Keep registered schemas across [`Validator::clear_cache`] calls.
    /// Default `false` (spec §6).
    pub fn set_cache_persistence(&self, persist: bool) {
        self.cache_persistence.store(persist, Ordering::SeqCst);
    }

    /// Empty the registry, unless cache persistence is enabled — a no-op
    /// in that case (spec §6).
    pub fn clear_cache(&self) {
        if !self.cache_persistence.load(Ordering::SeqCst) {
            self.registry.clear();
        }
    }

    /// Validate `instance` against `schema`, registering it first if it
    /// isn't already known, collapsing every failure mode into `false`.
    pub fn validate(&self, schema: SchemaSource<'_>, instance: &Value, options: &ValidationOptions) -> bool {
        self.validate_strict(schema, instance, options).is_ok()
    }

    /// Validate `instance` against `schema`, returning the first violation
    /// encountered (or the first broken reference actually exercised),
    /// registering `schema` into this validator's own registry first if it
    /// is not already present.
    pub fn validate_strict(&self, schema: SchemaSource<'_>, instance: &Value, options: &ValidationOptions) -> Result<(), Error> {
        let (document, base) = engine::normalize(schema, self.loader.as_ref())?;

        let mut key = base.clone();
        key.set_fragment(None);
        self.registry.insert_if_absent(key.to_string(), Arc::new(document.clone()));
        graph::walk(&document, &base, &self.registry, self.loader.as_ref());

        let top_level = if options.list {
            json!({"type": "array", "items": {"$ref": base.to_string()}})
        } else {
            document
        };

        let path = Path::new();
        let schema_path = Path::new();
        let ctx = Context::new(&self.registry, self.loader.as_ref(), &path, &schema_path, base);
        validate_node(&top_level, instance, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_schema_is_idempotent_and_visible_via_schemas() {
        let validator = Validator::new();
        validator.add_schema(SchemaSource::Value(json!({"id": "urn:example:a", "type": "integer"}))).unwrap();
        validator.add_schema(SchemaSource::Value(json!({"id": "urn:example:a", "type": "string"}))).unwrap();
        let schemas = validator.schemas();
        assert_eq!(schemas.get("urn:example:a"), Some(&json!({"id": "urn:example:a", "type": "integer"})));
    }

    #[test]
    fn clear_cache_is_a_no_op_when_persistence_is_enabled() {
        let validator = Validator::new();
        validator.add_schema(SchemaSource::Value(json!({"id": "urn:example:b", "type": "integer"}))).unwrap();
        validator.set_cache_persistence(true);
        validator.clear_cache();
        assert!(validator.schemas().contains_key("urn:example:b"));
    }

    #[test]
    fn clear_cache_empties_the_registry_by_default() {
        let validator = Validator::new();
        validator.add_schema(SchemaSource::Value(json!({"id": "urn:example:c", "type": "integer"}))).unwrap();
        validator.clear_cache();
        assert!(!validator.schemas().contains_key("urn:example:c"));
    }

    #[test]
    fn validate_resolves_refs_against_previously_added_schemas() {
        let validator = Validator::new();
        validator
            .add_schema(SchemaSource::Value(json!({
                "id": "urn:example:shared",
                "definitions": {"positive": {"type": "integer", "minimum": 0}}
            })))
            .unwrap();
        let schema = json!({"$ref": "urn:example:shared#/definitions/positive"});
        let options = ValidationOptions::new();
        assert!(validator.validate(SchemaSource::Value(schema.clone()), &json!(5), &options));
        assert!(!validator.validate(SchemaSource::Value(schema), &json!(-1), &options));
    }
}
