//! Synthetic URIs for schemas that did not arrive with one of their own.
//!
//! Spec §4.1 normalizes three schema input shapes into a (URI, parsed
//! document) pair: an already-resolved URI string is used as-is; raw schema
//! text or an already-decoded value gets "a synthetic `file://` URI whose
//! path component is a content digest" (spec §4.1) so it still has something
//! to register in the schema graph under, and so nested `$ref`s relative to
//! "nowhere" still resolve against a stable base.
use serde_json::Value;
use std::hash::{Hash, Hasher};
use url::Url;

/// A stable `file:///<digest>` URI for `value`'s canonical JSON encoding.
pub(crate) fn synthetic_uri(value: &Value) -> Url {
    let mut hasher = ahash::AHasher::default();
    value.to_string().hash(&mut hasher);
    let digest = hasher.finish();
    Url::parse(&format!("file:///{:016x}/", digest)).expect("synthetic URI is always valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn same_content_yields_same_uri() {
        let a = synthetic_uri(&json!({"type": "integer"}));
        let b = synthetic_uri(&json!({"type": "integer"}));
        assert_eq!(a, b);
    }

    #[test]
    fn different_content_yields_different_uri() {
        let a = synthetic_uri(&json!({"type": "integer"}));
        let b = synthetic_uri(&json!({"type": "string"}));
        assert_ne!(a, b);
    }
}
