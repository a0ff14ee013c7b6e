use serde_json::Value;

/// Merges `source` into `target`; later documents win.
///
/// Objects merge recursively. Arrays merge index by index: equal elements are
/// kept once, two objects (or two arrays) at the same index merge recursively,
/// anything else is replaced by the later element, and extra elements of the
/// longer array are kept. Scalars are replaced.
pub fn deep_merge(target: &mut Value, source: Value) {
  match (target, source) {
    (Value::Object(target), Value::Object(source)) => {
      for (key, value) in source {
        match target.get_mut(&key) {
          Some(existing) => deep_merge(existing, value),
          None => {
            target.insert(key, value);
          }
        }
      }
    }
    (Value::Array(target), Value::Array(source)) => {
      for (index, value) in source.into_iter().enumerate() {
        match target.get_mut(index) {
          Some(existing) if *existing == value => {}
          Some(existing) if is_mergeable(existing, &value) => deep_merge(existing, value),
          Some(existing) => *existing = value,
          None => target.push(value),
        }
      }
    }
    (target, source) => *target = source,
  }
}

fn is_mergeable(a: &Value, b: &Value) -> bool {
  matches!(
    (a, b),
    (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_))
  )
}
