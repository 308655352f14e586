//! Identifier lookup within a schema document.
//!
//! Draft 3 spells the identifier keyword `id`, not `$id` (the spelling the
//! teacher crate's `schemas::id_of` uses for its `Draft6`/`Draft7` arms). This
//! mirrors the teacher's own `Draft::Draft4` arm instead, which already
//! spells it `id` for the same historical reason.
use serde_json::Value;

/// Return the `id` declared directly on `schema`, if any.
#[inline]
pub(crate) fn id_of(schema: &Value) -> Option<&str> {
    schema.as_object()?.get("id")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_bare_id_keyword() {
        let schema = json!({"id": "http://example.com/schema", "type": "integer"});
        assert_eq!(id_of(&schema), Some("http://example.com/schema"));
    }

    #[test]
    fn absent_id_is_none() {
        assert_eq!(id_of(&json!({"type": "integer"})), None);
    }

    #[test]
    fn dollar_id_is_not_recognized() {
        // Draft 3 does not use the `$id` spelling introduced in later drafts.
        assert_eq!(id_of(&json!({"$id": "http://example.com/schema"})), None);
    }
}
