use jsonschema3::{validate, validate_strict, Error, SchemaSource, ValidationOptions};
use serde_json::json;

fn valid(schema: serde_json::Value, instance: serde_json::Value) -> bool {
    validate(SchemaSource::Value(schema), &instance, &ValidationOptions::new())
}

#[test]
fn type_accepts_a_union_of_primitives_and_subschemas() {
    let schema = json!({"type": ["integer", {"type": "string", "minLength": 3}]});
    assert!(valid(schema.clone(), json!(5)));
    assert!(valid(schema.clone(), json!("foo")));
    assert!(!valid(schema, json!("fo")));
}

#[test]
fn disallow_rejects_matching_declarations() {
    let schema = json!({"disallow": "string"});
    assert!(valid(schema.clone(), json!(5)));
    assert!(!valid(schema, json!("nope")));
}

#[test]
fn minimum_and_maximum_respect_exclusivity() {
    let schema = json!({"minimum": 0, "maximum": 10, "exclusiveMinimum": true});
    assert!(!valid(schema.clone(), json!(0)));
    assert!(valid(schema.clone(), json!(1)));
    assert!(valid(schema.clone(), json!(10)));
    assert!(!valid(schema, json!(11)));
}

#[test]
fn min_items_and_max_items_bound_array_length() {
    let schema = json!({"minItems": 1, "maxItems": 2});
    assert!(!valid(schema.clone(), json!([])));
    assert!(valid(schema.clone(), json!([1])));
    assert!(valid(schema.clone(), json!([1, 2])));
    assert!(!valid(schema, json!([1, 2, 3])));
}

#[test]
fn unique_items_treats_numerically_equal_numbers_as_duplicates() {
    let schema = json!({"uniqueItems": true});
    assert!(valid(schema.clone(), json!([1, 2, 3])));
    assert!(!valid(schema, json!([1, 1.0])));
}

#[test]
fn pattern_matches_anywhere_in_the_string() {
    let schema = json!({"pattern": "bar"});
    assert!(valid(schema.clone(), json!("foobarbaz")));
    assert!(!valid(schema, json!("foobaz")));
}

#[test]
fn min_length_and_max_length_count_unicode_scalars() {
    let schema = json!({"minLength": 2, "maxLength": 2});
    assert!(valid(schema.clone(), json!("\u{1F600}\u{1F600}")));
    assert!(!valid(schema, json!("\u{1F600}")));
}

#[test]
fn divisible_by_uses_exact_decimal_arithmetic() {
    let schema = json!({"divisibleBy": 0.1});
    assert!(valid(schema.clone(), json!(0.3)));
    assert!(!valid(schema, json!(0.25)));
}

#[test]
fn divisible_by_zero_always_violates() {
    let schema = json!({"divisibleBy": 0});
    assert!(!valid(schema, json!(4)));
}

#[test]
fn enum_requires_deep_structural_equality() {
    let schema = json!({"enum": [{"a": 1}, "red", 3]});
    assert!(valid(schema.clone(), json!({"a": 1})));
    assert!(valid(schema.clone(), json!("red")));
    assert!(!valid(schema, json!({"a": 2})));
}

#[test]
fn properties_enforces_per_property_required_flag() {
    let schema = json!({
        "properties": {
            "name": {"type": "string", "required": true},
            "age": {"type": "integer"}
        }
    });
    assert!(valid(schema.clone(), json!({"name": "ann"})));
    assert!(!valid(schema.clone(), json!({"age": 9})));
    assert!(!valid(schema, json!({"name": 5})));
}

#[test]
fn pattern_properties_validates_matching_keys() {
    let schema = json!({"patternProperties": {"^S_": {"type": "string"}}});
    assert!(valid(schema.clone(), json!({"S_a": "x"})));
    assert!(!valid(schema, json!({"S_a": 1})));
}

#[test]
fn additional_properties_false_rejects_unclaimed_keys() {
    let schema = json!({
        "properties": {"name": {"type": "string"}},
        "additionalProperties": false
    });
    assert!(valid(schema.clone(), json!({"name": "ann"})));
    assert!(!valid(schema, json!({"name": "ann", "extra": 1})));
}

#[test]
fn additional_properties_schema_constrains_unclaimed_keys() {
    let schema = json!({
        "properties": {"name": {"type": "string"}},
        "additionalProperties": {"type": "integer"}
    });
    assert!(valid(schema.clone(), json!({"name": "ann", "age": 9})));
    assert!(!valid(schema, json!({"name": "ann", "age": "nine"})));
}

#[test]
fn items_as_array_applies_positional_schemas() {
    let schema = json!({"items": [{"type": "integer"}, {"type": "string"}]});
    assert!(valid(schema.clone(), json!([1, "two"])));
    assert!(!valid(schema, json!(["one", "two"])));
}

#[test]
fn additional_items_false_caps_array_length_beyond_the_prefix() {
    let schema = json!({"items": [{"type": "integer"}], "additionalItems": false});
    assert!(valid(schema.clone(), json!([1])));
    assert!(!valid(schema, json!([1, 2])));
}

#[test]
fn dependencies_string_form_requires_sibling_property() {
    let schema = json!({"dependencies": {"credit_card": "billing_address"}});
    assert!(valid(schema.clone(), json!({})));
    assert!(valid(schema.clone(), json!({"credit_card": "1", "billing_address": "x"})));
    assert!(!valid(schema, json!({"credit_card": "1"})));
}

#[test]
fn dependencies_schema_form_validates_the_whole_instance() {
    let schema = json!({
        "dependencies": {"credit_card": {"properties": {"billing_address": {"type": "string", "required": true}}}}
    });
    assert!(!valid(schema, json!({"credit_card": "1"})));
}

#[test]
fn extends_requires_satisfying_the_base_schema_too() {
    let schema = json!({"extends": {"type": "integer"}, "minimum": 0});
    assert!(valid(schema.clone(), json!(5)));
    assert!(!valid(schema.clone(), json!(-1)));
    assert!(!valid(schema, json!("nope")));
}

#[test]
fn ref_resolves_local_fragments() {
    let schema = json!({
        "definitions": {"positive": {"type": "integer", "minimum": 0}},
        "properties": {"count": {"$ref": "#/definitions/positive"}}
    });
    assert!(valid(schema.clone(), json!({"count": 5})));
    assert!(!valid(schema, json!({"count": -1})));
}

#[test]
fn ref_to_a_broken_fragment_is_a_schema_error_not_a_validation_failure() {
    let schema = json!({"$ref": "#/definitions/missing"});
    let err = validate_strict(SchemaSource::Value(schema), &json!(1), &ValidationOptions::new()).unwrap_err();
    match err {
        Error::Schema(_) => {}
        Error::Validation(validation_error) => panic!("expected a schema error, got {}", validation_error),
    }
}

#[test]
fn list_option_validates_each_array_element_against_the_schema() {
    let schema = json!({"type": "integer"});
    let options = ValidationOptions::new().with_list(true);
    assert!(validate(SchemaSource::Value(schema.clone()), &json!([1, 2, 3]), &options));
    assert!(!validate(SchemaSource::Value(schema), &json!([1, "two"]), &options));
}

fn strict_err(schema: serde_json::Value, instance: serde_json::Value, options: &ValidationOptions) -> jsonschema3::ValidationError {
    match validate_strict(SchemaSource::Value(schema), &instance, options).unwrap_err() {
        Error::Validation(err) => err,
        Error::Schema(err) => panic!("expected a validation error, got {}", err),
    }
}

#[test]
fn scenario_1_missing_required_property_fails_at_the_instance_root() {
    let schema = json!({"type": "object", "properties": {"a": {"type": "integer", "required": true}}});
    let options = ValidationOptions::new();
    assert!(valid(schema.clone(), json!({"a": 5})));
    let err = strict_err(schema, json!({}), &options);
    assert_eq!(err.path.to_string(), "#/");
}

#[test]
fn scenario_2_wrong_property_type_fails_at_the_property_path() {
    let schema = json!({"type": "object", "properties": {"a": {"type": "integer", "required": true}}});
    let options = ValidationOptions::new();
    let err = strict_err(schema, json!({"a": "taco"}), &options);
    assert_eq!(err.path.to_string(), "#/a");
    assert!(err.to_string().contains("integer"));
}

#[test]
fn scenario_6_list_option_reports_the_failing_elements_index() {
    let schema = json!({"type": "integer"});
    let options = ValidationOptions::new().with_list(true);
    assert!(validate(SchemaSource::Value(schema.clone()), &json!([1, 2, 3]), &options));
    let err = strict_err(schema, json!([1, "x"]), &options);
    assert_eq!(err.path.to_string(), "#/1");
}
