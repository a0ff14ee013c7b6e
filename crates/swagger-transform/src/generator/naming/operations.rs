use super::identifiers::{capitalize, sanitize_identifier};

/// Last path segment that is not a `{param}` template; empty for `/`.
pub(crate) fn last_path_segment(path: &str) -> &str {
  path
    .split('/')
    .rev()
    .find(|segment| !segment.is_empty() && !(segment.starts_with('{') && segment.ends_with('}')))
    .unwrap_or_default()
}

/// Operation name: the `operationId` when present, else `<method><LastSegment>`.
///
/// `GET /pets/{id}` without an id becomes `getPets`.
#[must_use]
pub fn operation_name(operation_id: Option<&str>, method: &str, path: &str) -> String {
  match operation_id.map(str::trim).filter(|id| !id.is_empty()) {
    Some(id) => id.to_string(),
    None => format!("{method}{}", capitalize(last_path_segment(path))),
  }
}

/// Identifier used for the generated request function.
#[must_use]
pub fn function_name(operation: &str) -> String {
  sanitize_identifier(operation)
}
