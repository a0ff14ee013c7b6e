use std::{collections::BTreeSet, sync::LazyLock};

use any_ascii::any_ascii;
use regex::Regex;

static INVALID_IDENTIFIER_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_$]+").unwrap());
static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());
static PLAIN_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").unwrap());

const UNNAMED: &str = "Unnamed";

/// Upper-cases the first character, leaving the rest untouched.
pub(crate) fn capitalize(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Lower-cases the first character, leaving the rest untouched.
pub(crate) fn uncapitalize(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Turns arbitrary text into a TypeScript identifier.
///
/// Transliterates to ASCII, replaces each run of characters outside
/// `[A-Za-z0-9_$]` with a single `_` and prefixes `_` when the result starts
/// with a digit.
pub(crate) fn sanitize_identifier(input: &str) -> String {
  let ascii = any_ascii(input);
  let replaced = INVALID_IDENTIFIER_CHARS_RE.replace_all(&ascii, "_");

  match replaced.chars().next() {
    None => UNNAMED.to_string(),
    Some(first) if first.is_ascii_digit() => format!("_{replaced}"),
    Some(_) => replaced.into_owned(),
  }
}

pub(crate) fn is_identifier(input: &str) -> bool {
  IDENTIFIER_RE.is_match(input)
}

/// Object-literal key: bare when it is an identifier, single-quoted otherwise.
pub(crate) fn property_key(key: &str) -> String {
  if is_identifier(key) {
    key.to_string()
  } else {
    quote_string(key)
  }
}

/// Whether a constructor may use `this.key = init.key` for this field.
///
/// Anything outside `[A-Za-z0-9]` goes through `this['key']`.
pub(crate) fn is_plain_field(key: &str) -> bool {
  PLAIN_FIELD_RE.is_match(key) && is_identifier(key)
}

/// Single-quoted TypeScript string literal.
pub(crate) fn quote_string(value: &str) -> String {
  let escaped = value
    .replace('\\', "\\\\")
    .replace('\'', "\\'")
    .replace('\n', "\\n")
    .replace('\r', "\\r");
  format!("'{escaped}'")
}

/// Key of the definition a `$ref` points at: its last `/` segment, JSON-pointer unescaped.
pub(crate) fn ref_key(reference: &str) -> String {
  let segment = reference.rsplit('/').next().unwrap_or(reference);
  segment.replace("~1", "/").replace("~0", "~")
}

pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}
