//! Helpers over the instance/schema value model (plain `serde_json::Value`).
//!
//! Grounded on `keywords::helpers::equal` in the teacher crate: numbers are
//! compared with `num_cmp::NumCmp` instead of `serde_json::Number`'s own
//! `PartialEq` (which does not consider `1` and `1.0` equal, since they are
//! stored in different internal representations) or a lossy `f64` cast
//! (which loses precision for integers wider than 53 bits). This crate
//! extends the same dispatch recursively into arrays and objects, since
//! `enum` and `uniqueItems` both require *deep* structural equality, and
//! reuses it for `minimum`/`maximum`'s ordering comparisons.
use num_cmp::NumCmp;
use serde_json::{Number, Value};

macro_rules! dispatch_cmp {
    ($op:ident, $left:expr, $right:expr) => {
        if let Some(b) = $right.as_u64() {
            NumCmp::$op($left, b)
        } else if let Some(b) = $right.as_i64() {
            NumCmp::$op($left, b)
        } else {
            NumCmp::$op($left, $right.as_f64().expect("JSON numbers always convert to f64"))
        }
    };
}

fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let Some(a) = left.as_u64() {
        dispatch_cmp!(num_eq, a, right)
    } else if let Some(a) = left.as_i64() {
        dispatch_cmp!(num_eq, a, right)
    } else {
        let a = left.as_f64().expect("JSON numbers always convert to f64");
        dispatch_cmp!(num_eq, a, right)
    }
}

/// `true` iff `instance` is greater than or equal to `limit` without the
/// precision loss a blanket `f64` cast would introduce for large integers.
pub(crate) fn num_ge(instance: &Number, limit: &Number) -> bool {
    if let Some(a) = instance.as_u64() {
        dispatch_cmp!(num_ge, a, limit)
    } else if let Some(a) = instance.as_i64() {
        dispatch_cmp!(num_ge, a, limit)
    } else {
        let a = instance.as_f64().expect("JSON numbers always convert to f64");
        dispatch_cmp!(num_ge, a, limit)
    }
}

/// `true` iff `instance` is strictly greater than `limit`.
pub(crate) fn num_gt(instance: &Number, limit: &Number) -> bool {
    if let Some(a) = instance.as_u64() {
        dispatch_cmp!(num_gt, a, limit)
    } else if let Some(a) = instance.as_i64() {
        dispatch_cmp!(num_gt, a, limit)
    } else {
        let a = instance.as_f64().expect("JSON numbers always convert to f64");
        dispatch_cmp!(num_gt, a, limit)
    }
}

/// `true` iff `instance` is less than or equal to `limit`.
pub(crate) fn num_le(instance: &Number, limit: &Number) -> bool {
    if let Some(a) = instance.as_u64() {
        dispatch_cmp!(num_le, a, limit)
    } else if let Some(a) = instance.as_i64() {
        dispatch_cmp!(num_le, a, limit)
    } else {
        let a = instance.as_f64().expect("JSON numbers always convert to f64");
        dispatch_cmp!(num_le, a, limit)
    }
}

/// `true` iff `instance` is strictly less than `limit`.
pub(crate) fn num_lt(instance: &Number, limit: &Number) -> bool {
    if let Some(a) = instance.as_u64() {
        dispatch_cmp!(num_lt, a, limit)
    } else if let Some(a) = instance.as_i64() {
        dispatch_cmp!(num_lt, a, limit)
    } else {
        let a = instance.as_f64().expect("JSON numbers always convert to f64");
        dispatch_cmp!(num_lt, a, limit)
    }
}

/// Deep structural equality, treating numerically-equal numbers (`1` and
/// `1.0`) as equal regardless of their internal integer/float representation.
/// Object comparison is key-order independent; array comparison is not.
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, value)| b.get(key).map_or(false, |other| equal(value, other)))
        }
        _ => false,
    }
}

/// `true` iff no two elements of `items` are equal under [`equal`].
pub(crate) fn all_unique(items: &[Value]) -> bool {
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if equal(a, b) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_and_float_representations_are_equal() {
        assert!(equal(&json!(1), &json!(1.0)));
    }

    #[test]
    fn unique_items_rejects_numeric_duplicates() {
        let items = vec![json!(1), json!(1.0)];
        assert!(!all_unique(&items));
    }

    #[test]
    fn objects_compare_order_independently() {
        assert!(equal(
            &json!({"a": 1, "b": 2}),
            &json!({"b": 2, "a": 1})
        ));
    }

    #[test]
    fn arrays_are_order_sensitive() {
        assert!(!equal(&json!([1, 2]), &json!([2, 1])));
    }

    #[test]
    fn large_integers_compare_without_losing_precision() {
        let huge = (1u64 << 54) + 1;
        let limit = huge - 1;
        let huge_number = match json!(huge) {
            Value::Number(n) => n,
            _ => unreachable!(),
        };
        let limit_number = match json!(limit) {
            Value::Number(n) => n,
            _ => unreachable!(),
        };
        assert!(num_gt(&huge_number, &limit_number));
        assert!(!num_lt(&huge_number, &limit_number));
    }
}
