//! Eager pass over a freshly-added schema document: registers every
//! `id`-bearing sub-schema under its resolved URI and kicks off loader
//! prefetch for every `$ref` target it finds along the way.
//!
//! Grounded on `resolver::Resolver::find_schemas`, which walks the same set
//! of subschema-bearing positions to pre-populate its store before the first
//! validation runs. Failures encountered here (a `$ref` that doesn't
//! resolve, a fetch that errors) are swallowed: per spec §4.4, a broken
//! reference is only an error if validation actually exercises it.
use crate::loader::SchemaLoader;
use crate::registry::Registry;
use crate::schemas;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

pub(crate) fn walk(schema: &Value, base: &Url, registry: &Registry, loader: &dyn SchemaLoader) {
    let base = match schemas::id_of(schema).and_then(|id| base.join(id).ok()) {
        Some(rebased) => {
            let mut key = rebased.clone();
            key.set_fragment(None);
            registry.insert_if_absent(key.to_string(), Arc::new(schema.clone()));
            rebased
        }
        None => base.clone(),
    };

    let object = match schema.as_object() {
        Some(object) => object,
        None => return,
    };

    if let Some(reference) = object.get("$ref").and_then(Value::as_str) {
        prefetch(reference, &base, registry, loader);
    }

    for keyword in ["type", "disallow"] {
        if let Some(Value::Array(items)) = object.get(keyword) {
            for item in items {
                if item.is_object() {
                    walk(item, &base, registry, loader);
                }
            }
        }
    }

    if let Some(Value::Object(properties)) = object.get("properties") {
        for value in properties.values() {
            walk(value, &base, registry, loader);
        }
    }

    if let Some(Value::Object(pattern_properties)) = object.get("patternProperties") {
        for value in pattern_properties.values() {
            walk(value, &base, registry, loader);
        }
    }

    match object.get("items") {
        Some(value @ Value::Object(_)) => walk(value, &base, registry, loader),
        Some(Value::Array(items)) => {
            for item in items {
                walk(item, &base, registry, loader);
            }
        }
        _ => {}
    }

    for keyword in ["additionalProperties", "additionalItems"] {
        if let Some(value @ Value::Object(_)) = object.get(keyword) {
            walk(value, &base, registry, loader);
        }
    }

    if let Some(value) = object.get("extends") {
        match value {
            Value::Object(_) => walk(value, &base, registry, loader),
            Value::Array(items) => {
                for item in items {
                    walk(item, &base, registry, loader);
                }
            }
            _ => {}
        }
    }

    if let Some(Value::Object(dependencies)) = object.get("dependencies") {
        for value in dependencies.values() {
            if value.is_object() {
                walk(value, &base, registry, loader);
            }
        }
    }
}

fn prefetch(reference: &str, base: &Url, registry: &Registry, loader: &dyn SchemaLoader) {
    let target = match base.join(reference) {
        Ok(url) => url,
        Err(_) => return,
    };
    let mut key = target.clone();
    key.set_fragment(None);
    let key = key.to_string();
    if registry.contains(&key) {
        return;
    }
    if let Ok(document) = loader.load(&target) {
        registry.insert_if_absent(key, Arc::new(document));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DefaultLoader;
    use serde_json::json;

    #[test]
    fn registers_nested_identified_schemas() {
        let registry = Registry::new();
        let loader = DefaultLoader::new();
        let base = Url::parse("file:///root/schema.json").unwrap();
        let schema = json!({
            "id": "file:///root/schema.json",
            "properties": {
                "child": {"id": "child.json", "type": "string"}
            }
        });
        walk(&schema, &base, &registry, &loader);
        assert!(registry.contains("file:///root/schema.json"));
        assert!(registry.contains("file:///root/child.json"));
    }
}
