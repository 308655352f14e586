//! Per-validation-call state threaded through the recursive descent.
//!
//! Grounded on `compilation::context::CompilationContext`, which carries a
//! resolution scope and rebases it with `push`/`build_url` as compilation
//! walks into nested schemas. This crate needs the same rebasing, but at
//! validation time rather than compile time, since `$ref` resolution and
//! `id`-scoped sub-schemas are both resolved lazily against the instance
//! being checked (spec §4.4).
use crate::loader::SchemaLoader;
use crate::paths::Path;
use crate::registry::Registry;
use crate::schemas;
use serde_json::Value;
use url::Url;

pub(crate) struct Context<'a> {
    pub(crate) registry: &'a Registry,
    pub(crate) loader: &'a dyn SchemaLoader,
    /// Path into the instance being validated.
    pub(crate) path: &'a Path,
    /// Path into the schema driving validation, tracked in parallel so error
    /// messages can point at the keyword that raised them.
    pub(crate) schema_path: &'a Path,
    /// Current `$ref`/`id` resolution scope.
    pub(crate) base: Url,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        registry: &'a Registry,
        loader: &'a dyn SchemaLoader,
        path: &'a Path,
        schema_path: &'a Path,
        base: Url,
    ) -> Self {
        Context {
            registry,
            loader,
            path,
            schema_path,
            base,
        }
    }

    /// Rebase against `schema`'s own `id`, if it declares one. Schemas
    /// without an `id` inherit the caller's scope unchanged.
    pub(crate) fn scoped(&self, schema: &Value) -> Context<'a> {
        let base = match schemas::id_of(schema).and_then(|id| self.base.join(id).ok()) {
            Some(rebased) => rebased,
            None => self.base.clone(),
        };
        Context {
            registry: self.registry,
            loader: self.loader,
            path: self.path,
            schema_path: self.schema_path,
            base,
        }
    }
}
