//! One module per keyword, invoked from [`validate_all`] in the fixed order
//! laid out by the value model: each validator is a guard that only
//! constrains instances of the shape it cares about, and the first failure
//! along the way wins.
mod additional_items;
mod additional_properties;
mod dependencies;
mod disallow;
mod divisible_by;
mod enum_;
mod extends;
mod items;
mod max_items;
mod max_length;
mod maximum;
mod min_items;
mod min_length;
mod minimum;
mod pattern;
mod pattern_properties;
mod properties;
mod ref_;
mod type_;
mod type_support;
mod unique_items;

use crate::context::Context;
use crate::error::KeywordResult;
use serde_json::{Map, Value};

pub(crate) fn validate_all(object: &Map<String, Value>, instance: &Value, ctx: &Context) -> KeywordResult {
    type_::check(object, instance, ctx)?;
    disallow::check(object, instance, ctx)?;
    minimum::check(object, instance, ctx)?;
    maximum::check(object, instance, ctx)?;
    min_items::check(object, instance, ctx)?;
    max_items::check(object, instance, ctx)?;
    unique_items::check(object, instance, ctx)?;
    pattern::check(object, instance, ctx)?;
    min_length::check(object, instance, ctx)?;
    max_length::check(object, instance, ctx)?;
    divisible_by::check(object, instance, ctx)?;
    enum_::check(object, instance, ctx)?;
    properties::check(object, instance, ctx)?;
    pattern_properties::check(object, instance, ctx)?;
    additional_properties::check(object, instance, ctx)?;
    items::check(object, instance, ctx)?;
    additional_items::check(object, instance, ctx)?;
    dependencies::check(object, instance, ctx)?;
    extends::check(object, instance, ctx)?;
    ref_::check(object, instance, ctx)?;
    Ok(())
}
