use super::Documentation;
use crate::generator::naming::identifiers::property_key;

pub(crate) const INDENT: &str = "  ";

pub(crate) fn indent(depth: usize) -> String {
  INDENT.repeat(depth)
}

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
  /// A declared or built-in name: `Pet`, `string`, `any`, `FormData`.
  Named(String),
  /// Rendered literal: `'a'`, `1`, `true`, `null`.
  Literal(String),
  Union(Vec<TsType>),
  Intersection(Vec<TsType>),
  Array(Box<TsType>),
  /// `Record<string, V>`.
  Record(Box<TsType>),
  /// Inline object literal type.
  Object(Vec<PropItem>),
}

impl TsType {
  pub const ANY: &'static str = "any";
  pub const UNDEFINED: &'static str = "undefined";
  pub const FORM_DATA: &'static str = "FormData";

  #[must_use]
  pub fn named(name: impl Into<String>) -> Self {
    Self::Named(name.into())
  }

  #[must_use]
  pub fn any() -> Self {
    Self::named(Self::ANY)
  }

  #[must_use]
  pub fn undefined() -> Self {
    Self::named(Self::UNDEFINED)
  }

  #[must_use]
  pub fn is_undefined(&self) -> bool {
    matches!(self, Self::Named(name) if name == Self::UNDEFINED)
  }

  /// Renders the expression as it appears at nesting `depth`.
  ///
  /// Object members are placed at `depth + 1` and the closing brace at `depth`,
  /// so the result can be written after any prefix on a line indented by `depth`.
  #[must_use]
  pub fn render(&self, depth: usize) -> String {
    match self {
      Self::Named(name) | Self::Literal(name) => name.clone(),
      Self::Union(members) if members.is_empty() => "never".to_string(),
      Self::Union(members) => join(members, " | ", depth, |_| false),
      Self::Intersection(members) => join(members, " & ", depth, |member| matches!(member, Self::Union(_))),
      Self::Array(item) => {
        let rendered = item.render(depth);
        if matches!(**item, Self::Union(_) | Self::Intersection(_)) {
          format!("({rendered})[]")
        } else {
          format!("{rendered}[]")
        }
      }
      Self::Record(value) => format!("Record<string, {}>", value.render(depth)),
      Self::Object(properties) if properties.is_empty() => "{}".to_string(),
      Self::Object(properties) => {
        let mut out = String::from("{\n");
        let member_indent = indent(depth + 1);
        for property in properties {
          for line in property.docs().render() {
            out.push_str(&member_indent);
            out.push_str(&line);
            out.push('\n');
          }
          out.push_str(&member_indent);
          out.push_str(&property.signature(depth + 1));
          out.push('\n');
        }
        out.push_str(&indent(depth));
        out.push('}');
        out
      }
    }
  }
}

fn join(members: &[TsType], separator: &str, depth: usize, needs_parens: impl Fn(&TsType) -> bool) -> String {
  members
    .iter()
    .map(|member| {
      let rendered = member.render(depth);
      if needs_parens(member) {
        format!("({rendered})")
      } else {
        rendered
      }
    })
    .collect::<Vec<_>>()
    .join(separator)
}

/// One resolved object property, ready to render.
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct PropItem {
  #[builder(into)]
  pub key: String,
  pub ty: TsType,
  #[builder(default)]
  pub required: bool,
  #[builder(into)]
  pub description: Option<String>,
}

impl PropItem {
  #[must_use]
  pub fn docs(&self) -> Documentation {
    Documentation::from_optional(self.description.as_deref())
  }

  /// `key: T` or `key?: T`, with the key quoted when it is not an identifier.
  #[must_use]
  pub fn signature(&self, depth: usize) -> String {
    let marker = if self.required { "" } else { "?" };
    format!("{}{marker}: {}", property_key(&self.key), self.ty.render(depth))
  }
}
