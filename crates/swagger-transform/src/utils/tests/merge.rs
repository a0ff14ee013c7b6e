use serde_json::json;

use crate::utils::deep_merge;

#[test]
fn test_scalars_are_overridden() {
  let mut target = json!({ "info": { "title": "A", "version": "1" }, "host": "a.example" });
  deep_merge(&mut target, json!({ "info": { "title": "B" }, "basePath": "/v2" }));

  assert_eq!(
    target,
    json!({ "info": { "title": "B", "version": "1" }, "host": "a.example", "basePath": "/v2" })
  );
}

#[test]
fn test_objects_at_same_index_merge_instead_of_append() {
  let mut target = json!({
    "parameters": [
      { "in": "query", "name": "limit", "type": "integer" },
      { "in": "query", "name": "offset" }
    ]
  });
  deep_merge(
    &mut target,
    json!({
      "parameters": [
        { "in": "query", "name": "limit", "description": "Page size" },
        { "in": "query", "name": "offset" },
        { "in": "header", "name": "X-Trace" }
      ]
    }),
  );

  assert_eq!(
    target,
    json!({
      "parameters": [
        { "in": "query", "name": "limit", "type": "integer", "description": "Page size" },
        { "in": "query", "name": "offset" },
        { "in": "header", "name": "X-Trace" }
      ]
    })
  );
}

#[test]
fn test_array_elements_of_different_kinds_are_replaced() {
  let mut target = json!({ "tags": ["a", { "x": 1 }, [1, 2]] });
  deep_merge(&mut target, json!({ "tags": ["b", "c", [1]] }));

  assert_eq!(target, json!({ "tags": ["b", "c", [1, 2]] }), "nested arrays merge index-wise too");
}

#[test]
fn test_shorter_source_array_keeps_tail() {
  let mut target = json!([1, 2, 3]);
  deep_merge(&mut target, json!([9]));
  assert_eq!(target, json!([9, 2, 3]));
}

#[test]
fn test_mismatched_types_replace() {
  let mut target = json!({ "paths": { "/a": {} } });
  deep_merge(&mut target, json!({ "paths": null }));
  assert_eq!(target, json!({ "paths": null }));
}
