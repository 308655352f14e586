//! `divisibleBy`: exact decimal division, not floating-point remainder.
//!
//! `0.3 % 0.1` is nonzero in IEEE 754 double precision, but `divisibleBy: 0.1`
//! must still accept `0.3` — the keyword is about decimal divisibility, not
//! binary floating-point. Grounded on the teacher repo's
//! `keywords::multiple_of` validators, which fall back to exact
//! `fraction::BigFraction` arithmetic for this reason; this crate uses that
//! arithmetic unconditionally, parsing each number's original decimal text
//! (preserved by `serde_json`'s `arbitrary_precision` feature) rather than
//! its lossy `f64` approximation.
use crate::context::Context;
use crate::error::{quote, violation, KeywordResult};
use fraction::{BigFraction, BigUint};
use serde_json::{Map, Value};

fn to_fraction(number: &serde_json::Number) -> BigFraction {
    number
        .to_string()
        .parse()
        .unwrap_or_else(|_| BigFraction::from(number.as_f64().unwrap_or(0.0)))
}

fn as_number(value: &Value) -> Option<&serde_json::Number> {
    match value {
        Value::Number(number) => Some(number),
        _ => None,
    }
}

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let (divisor, dividend) = match (object.get("divisibleBy").and_then(as_number), as_number(instance)) {
        (Some(divisor), Some(dividend)) => (divisor, dividend),
        _ => return Ok(()),
    };

    let divisor_fraction = to_fraction(divisor);
    if divisor_fraction.numer() == Some(&BigUint::from(0u8)) {
        return Err(violation(
            format!("divisibleBy value {} is zero", quote(&Value::Number(divisor.clone()))),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ));
    }

    let ratio = to_fraction(dividend) / divisor_fraction;
    let is_whole = ratio.denom() == Some(&BigUint::from(1u8));
    if is_whole {
        Ok(())
    } else {
        Err(violation(
            format!("{} is not divisible by {}", quote(instance), divisor),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
