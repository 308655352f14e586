//! The primitive type vocabulary used by the `type` / `disallow` keywords.
use serde_json::Value;
use std::{convert::TryFrom, fmt};

/// One of the primitive classes a `type`/`disallow` declaration can name.
///
/// `Integer` and `Number` are kept distinct because Draft 3 treats them as
/// separate `type` classes even though every `Integer` instance is also a
/// member of `Number` for the purposes of `minimum`/`maximum`/`divisibleBy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
    /// Matches any instance; also the fallback for names this crate does not
    /// recognize (see spec's forward-compatibility note on unknown `type` names).
    Any,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Array => write!(f, "array"),
            PrimitiveType::Boolean => write!(f, "boolean"),
            PrimitiveType::Integer => write!(f, "integer"),
            PrimitiveType::Null => write!(f, "null"),
            PrimitiveType::Number => write!(f, "number"),
            PrimitiveType::Object => write!(f, "object"),
            PrimitiveType::String => write!(f, "string"),
            PrimitiveType::Any => write!(f, "any"),
        }
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(PrimitiveType::Array),
            "boolean" => Ok(PrimitiveType::Boolean),
            "integer" => Ok(PrimitiveType::Integer),
            "null" => Ok(PrimitiveType::Null),
            "number" => Ok(PrimitiveType::Number),
            "object" => Ok(PrimitiveType::Object),
            "string" => Ok(PrimitiveType::String),
            "any" => Ok(PrimitiveType::Any),
            // Unknown names are forward-compatible: they match everything.
            // See the "Open questions" note on `type` in DESIGN.md.
            _ => Ok(PrimitiveType::Any),
        }
    }
}

/// Classify an instance's runtime case against a single primitive declaration.
pub(crate) fn matches(declared: PrimitiveType, instance: &Value) -> bool {
    match declared {
        PrimitiveType::Any => true,
        PrimitiveType::Null => instance.is_null(),
        PrimitiveType::Boolean => instance.is_boolean(),
        PrimitiveType::String => instance.is_string(),
        PrimitiveType::Array => instance.is_array(),
        PrimitiveType::Object => instance.is_object(),
        PrimitiveType::Integer => is_integer(instance),
        PrimitiveType::Number => instance.is_number(),
    }
}

/// `true` iff `instance` is a JSON number with no fractional component.
pub(crate) fn is_integer(instance: &Value) -> bool {
    match instance.as_f64() {
        Some(value) => instance.is_number() && value.fract() == 0.0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_is_also_a_number_instance() {
        let five = json!(5);
        assert!(matches(PrimitiveType::Integer, &five));
        assert!(matches(PrimitiveType::Number, &five));
    }

    #[test]
    fn fractional_number_is_not_an_integer() {
        let value = json!(5.5);
        assert!(!matches(PrimitiveType::Integer, &value));
        assert!(matches(PrimitiveType::Number, &value));
    }

    #[test]
    fn unknown_type_name_defaults_to_any() {
        assert_eq!(PrimitiveType::try_from("frobnicate"), Ok(PrimitiveType::Any));
    }
}
