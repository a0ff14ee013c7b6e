mod node;
mod registry;

pub use node::{AdditionalProperties, EnumValue, Enumeration, ObjectShape, SchemaKind, SchemaNode};
pub use registry::DefinitionRegistry;
use strum::{Display, EnumString};

pub(crate) const REF_KEY: &str = "$ref";

/// Location of a grouped request parameter.
///
/// `formData` and `body` parameters are not grouped; they take part in payload
/// selection instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Header,
  Path,
  Query,
}

impl ParameterLocation {
  /// Tag appended to the operation name when naming a synthetic parameter group.
  #[must_use]
  pub const fn tag(self) -> &'static str {
    match self {
      Self::Header => "Header",
      Self::Path => "Path",
      Self::Query => "Query",
    }
  }
}

#[cfg(test)]
mod tests;
