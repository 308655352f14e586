//! User-facing validation options.
//!
//! Grounded on `compilation::options::CompilationOptions`'s builder shape,
//! trimmed to the handful of switches this draft actually exposes (spec §6):
//! whether the schema is implicitly wrapped as a `list` schema, whether the
//! registry survives past the end of a single top-level validation call, and
//! which [`SchemaLoader`] fetches external references.
use crate::loader::{DefaultLoader, SchemaLoader};
use std::sync::Arc;

#[derive(Clone)]
pub struct ValidationOptions {
    pub(crate) list: bool,
    pub(crate) cache_persistence: bool,
    pub(crate) loader: Arc<dyn SchemaLoader>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            list: false,
            cache_persistence: false,
            loader: Arc::new(DefaultLoader::new()),
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        ValidationOptions::default()
    }

    /// Treat the schema as describing elements of a list: equivalent to
    /// validating against `{"type": "array", "items": <schema>}`.
    pub fn with_list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    /// Keep loaded external schemas in the registry across calls instead of
    /// clearing it after each top-level validation.
    pub fn with_cache_persistence(mut self, persist: bool) -> Self {
        self.cache_persistence = persist;
        self
    }

    pub fn with_loader(mut self, loader: impl SchemaLoader + 'static) -> Self {
        self.loader = Arc::new(loader);
        self
    }
}
