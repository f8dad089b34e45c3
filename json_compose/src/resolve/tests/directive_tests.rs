//! Tests covering the `$override`, `$add`, and `$delete` merge operations.

use anyhow::{Result, anyhow, ensure};
use camino::Utf8Path;
use rstest::rstest;
use serde_json::{Map, Value, json};

use super::super::directive::{apply_add, apply_delete, apply_directives, apply_override};
use super::{object, to_anyhow};

#[rstest]
#[case::replaces_nested_scalar(
    json!({"a": {"x": 1, "y": 2}}),
    json!({"a": {"x": 5}}),
    json!({"a": {"x": 5, "y": 2}})
)]
#[case::ignores_absent_keys(json!({"a": 1}), json!({"b": 2}), json!({"a": 1}))]
#[case::replaces_object_with_sequence(
    json!({"a": {"x": 1}}),
    json!({"a": [1, 2]}),
    json!({"a": [1, 2]})
)]
#[case::replaces_scalar_with_object(json!({"a": 3}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
#[case::recurses_into_shared_structure(
    json!({"a": {"b": {"x": 1, "y": 2}}, "c": 3}),
    json!({"a": {"b": {"y": 9}}}),
    json!({"a": {"b": {"x": 1, "y": 9}}, "c": 3})
)]
fn override_cases(
    #[case] target: Value,
    #[case] patch: Value,
    #[case] expected: Value,
) -> Result<()> {
    let mut node = object(target)?;
    apply_override(&mut node, object(patch)?);
    let result = Value::Object(node);
    ensure!(
        result == expected,
        "unexpected override result {result:?}; expected {expected:?}"
    );
    Ok(())
}

#[rstest]
#[case::inserts_missing_nested_key(
    json!({"a": {"x": 1}}),
    json!({"a": {"z": 9}}),
    json!({"a": {"x": 1, "z": 9}})
)]
#[case::no_op_on_present_scalar(json!({"a": 1}), json!({"a": 2}), json!({"a": 1}))]
#[case::inserts_new_top_level_key(json!({}), json!({"b": [1]}), json!({"b": [1]}))]
#[case::no_op_on_kind_mismatch(json!({"a": {"x": 1}}), json!({"a": 5}), json!({"a": {"x": 1}}))]
fn add_cases(#[case] target: Value, #[case] patch: Value, #[case] expected: Value) -> Result<()> {
    let mut node = object(target)?;
    apply_add(&mut node, object(patch)?);
    let result = Value::Object(node);
    ensure!(
        result == expected,
        "unexpected add result {result:?}; expected {expected:?}"
    );
    Ok(())
}

#[rstest]
#[case::removes_named_keys(
    json!({"a": {"x": 1, "y": 2}}),
    json!({"a": ["x"]}),
    json!({"a": {"y": 2}})
)]
#[case::drills_into_nested_objects(
    json!({"a": {"b": {"x": 1, "y": 2}}}),
    json!({"a": {"b": ["y"]}}),
    json!({"a": {"b": {"x": 1}}})
)]
#[case::cannot_remove_at_own_level(json!({"a": 1}), json!({"a": ["a"]}), json!({"a": 1}))]
#[case::skips_absent_targets(json!({"a": {"x": 1}}), json!({"b": ["x"]}), json!({"a": {"x": 1}}))]
#[case::skips_non_string_entries(
    json!({"a": {"x": 1, "y": 2}}),
    json!({"a": ["x", 5]}),
    json!({"a": {"y": 2}})
)]
#[case::no_op_on_scalar_payload_value(
    json!({"a": {"x": 1}}),
    json!({"a": "x"}),
    json!({"a": {"x": 1}})
)]
fn delete_cases(#[case] target: Value, #[case] patch: Value, #[case] expected: Value) -> Result<()> {
    let mut node = object(target)?;
    apply_delete(&mut node, object(patch)?);
    let result = Value::Object(node);
    ensure!(
        result == expected,
        "unexpected delete result {result:?}; expected {expected:?}"
    );
    Ok(())
}

#[rstest]
fn directives_apply_in_override_add_delete_order() -> Result<()> {
    let mut node = object(json!({
        "a": {"x": 1},
        "$override": {"a": {"x": 5}},
        "$add": {"a": {"x": 0, "z": 9}, "b": 1},
        "$delete": {"a": ["z"]}
    }))?;
    to_anyhow(apply_directives(&mut node, Utf8Path::new("doc.json")))?;
    let result = Value::Object(node);
    let expected = json!({"a": {"x": 5}, "b": 1});
    ensure!(
        result == expected,
        "unexpected directive result {result:?}; expected {expected:?}"
    );
    Ok(())
}

#[rstest]
fn directive_keys_are_consumed_even_when_empty() -> Result<()> {
    let mut node = object(json!({
        "a": 1,
        "$override": {},
        "$add": {},
        "$delete": {}
    }))?;
    to_anyhow(apply_directives(&mut node, Utf8Path::new("doc.json")))?;
    let result = Value::Object(node);
    ensure!(
        result == json!({"a": 1}),
        "directive keys must not survive application: {result:?}"
    );
    Ok(())
}

#[rstest]
#[case::override_payload("$override")]
#[case::add_payload("$add")]
#[case::delete_payload("$delete")]
fn directive_payload_must_be_object(#[case] directive: &str) -> Result<()> {
    let mut node = Map::new();
    node.insert(directive.to_owned(), json!(5));
    let err = match apply_directives(&mut node, Utf8Path::new("doc.json")) {
        Ok(()) => return Err(anyhow!("expected '{directive}' payload to be rejected")),
        Err(err) => err,
    };
    ensure!(
        err.to_string()
            .contains(&format!("'{directive}' value must be an object, found number")),
        "unexpected error {err}"
    );
    Ok(())
}
