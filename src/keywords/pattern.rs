//! `pattern`: an unanchored regular expression the instance string must
//! contain a match for somewhere within it.
use crate::context::Context;
use crate::error::{quote, violation, KeywordResult};
use regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn check(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    let (pattern, text) = match (object.get("pattern").and_then(Value::as_str), instance.as_str()) {
        (Some(pattern), Some(text)) => (pattern, text),
        _ => return Ok(()),
    };
    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_) => return Ok(()),
    };
    if regex.is_match(text) {
        Ok(())
    } else {
        Err(violation(
            format!("{} does not match the pattern '{}'", quote(instance), pattern),
            &ctx.path.to_pointer(),
            &ctx.schema_path.to_pointer(),
        ))
    }
}
