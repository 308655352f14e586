//! `$ref` resolution: turn a reference string plus the current scope into a
//! concrete schema node, loading the target document on demand if it was not
//! already registered by the eager graph pass.
//!
//! Grounded on `resolver::Resolver::resolve_fragment`/`pointer`: split off the
//! fragment, look the base document up in the registry, then walk the
//! fragment's slash-separated, percent-decoded segments indexing Mappings by
//! key and Sequences by integer. A segment that cannot be found is a defect
//! in the schema itself ([`SchemaError`]), never a [`ValidationError`].
use crate::context::Context;
use crate::error::{violation, Error, SchemaError};
use crate::paths::Path;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Resolves `reference` against the current scope, returning the matched
/// node plus the document's own URI (fragment stripped) — the scope any
/// further relative `$ref`s nested inside that node must resolve against.
pub(crate) fn resolve(reference: &str, ctx: &Context) -> Result<(Value, Url), Error> {
    let target = ctx
        .base
        .join(reference)
        .map_err(|_| violation(format!("invalid reference '{}'", reference), ctx.path, ctx.schema_path))?;

    let mut doc_key = target.clone();
    doc_key.set_fragment(None);
    let key = doc_key.to_string();

    let document = match ctx.registry.get(&key) {
        Some(document) => document,
        None => {
            let loaded = ctx
                .loader
                .load(&target)
                .map_err(|_| violation(format!("unresolved reference '{}'", reference), ctx.path, ctx.schema_path))?;
            let arc = Arc::new(loaded);
            ctx.registry.insert_if_absent(key, arc.clone());
            arc
        }
    };

    let node = navigate(&document, target.fragment(), ctx.schema_path)?;
    Ok((node, doc_key))
}

fn navigate(document: &Value, fragment: Option<&str>, schema_path: &Path) -> Result<Value, Error> {
    let fragment = match fragment {
        Some(fragment) if !fragment.is_empty() => fragment,
        _ => return Ok(document.clone()),
    };

    let mut node = document;
    for segment in fragment.split('/').filter(|segment| !segment.is_empty()) {
        let decoded = percent_decode_str(segment)
            .decode_utf8()
            .map_err(|_| Error::from(SchemaError::broken_reference(segment, &schema_path.to_pointer())))?;
        node = match node {
            Value::Object(map) => map
                .get(decoded.as_ref())
                .ok_or_else(|| Error::from(SchemaError::broken_reference(segment, &schema_path.to_pointer())))?,
            Value::Array(items) => {
                let index: usize = decoded
                    .parse()
                    .map_err(|_| Error::from(SchemaError::broken_reference(segment, &schema_path.to_pointer())))?;
                items
                    .get(index)
                    .ok_or_else(|| Error::from(SchemaError::broken_reference(segment, &schema_path.to_pointer())))?
            }
            _ => return Err(SchemaError::not_an_object(&schema_path.to_pointer()).into()),
        };
    }
    Ok(node.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn navigates_object_and_array_segments() {
        let document = json!({"definitions": {"items": [{"type": "integer"}]}});
        let path = Path::new();
        let node = navigate(&document, Some("/definitions/items/0"), &path).unwrap();
        assert_eq!(node, json!({"type": "integer"}));
    }

    #[test]
    fn missing_segment_is_a_schema_error() {
        let document = json!({"definitions": {}});
        let path = Path::new();
        let err = navigate(&document, Some("/definitions/missing"), &path).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn absent_fragment_returns_whole_document() {
        let document = json!({"type": "integer"});
        let path = Path::new();
        let node = navigate(&document, None, &path).unwrap();
        assert_eq!(node, document);
    }
}
