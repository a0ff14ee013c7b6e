use std::collections::BTreeSet;

use crate::generator::{
  ast::{PropItem, TsType},
  config::Config,
  naming::{NamingResolver, identifiers::{quote_string, ref_key}},
  schema::{AdditionalProperties, EnumValue, Enumeration, ObjectShape, SchemaKind, SchemaNode},
};

/// Definition keys a type expression depends on.
///
/// Keys, not file names: they are mapped to modules at emission time.
pub type ImportSet = BTreeSet<String>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved {
  pub imports: ImportSet,
  /// `None` when the node has no recognizable type.
  pub ty: Option<TsType>,
}

impl Resolved {
  fn absent() -> Self {
    Self::default()
  }

  fn of(ty: TsType) -> Self {
    Self {
      imports: ImportSet::new(),
      ty: Some(ty),
    }
  }

  fn map(self, f: impl FnOnce(TsType) -> TsType) -> Self {
    Self {
      imports: self.imports,
      ty: self.ty.map(f),
    }
  }
}

/// Converts schema nodes into TypeScript type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
  config: &'a Config,
  naming: NamingResolver<'a>,
}

impl<'a> TypeResolver<'a> {
  #[must_use]
  pub fn new(config: &'a Config) -> Self {
    Self {
      config,
      naming: NamingResolver::new(config),
    }
  }

  #[must_use]
  pub fn resolve(&self, node: &SchemaNode) -> Resolved {
    match &node.kind {
      SchemaKind::Reference(target) => self.resolve_reference(target),
      SchemaKind::Intersection(members) => self.resolve_intersection(members),
      SchemaKind::Enumeration(enumeration) => Self::resolve_enumeration(enumeration),
      SchemaKind::Array(item) => self.resolve(item).map(|ty| TsType::Array(Box::new(ty))),
      SchemaKind::Object(shape) => self.resolve_object(shape),
      SchemaKind::Primitive(name) => Resolved::of(TsType::named(self.config.type_map.map(name))),
      SchemaKind::Untyped => Resolved::absent(),
    }
  }

  /// Resolves each property, dropping those without a type.
  #[must_use]
  pub fn resolve_properties(&self, shape: &ObjectShape) -> (ImportSet, Vec<PropItem>) {
    let mut imports = ImportSet::new();
    let mut properties = Vec::with_capacity(shape.properties.len());

    for (key, node) in &shape.properties {
      let Resolved { imports: prop_imports, ty } = self.resolve(node);
      let Some(ty) = ty else {
        continue;
      };
      imports.extend(prop_imports);
      properties.push(PropItem {
        key: key.clone(),
        ty,
        required: shape.is_required(key),
        description: node.description.clone(),
      });
    }

    (imports, properties)
  }

  /// Resolves a reference to the definition stored under `key`.
  #[must_use]
  pub fn resolve_key(&self, key: &str) -> Resolved {
    Resolved {
      ty: Some(TsType::named(self.naming.type_name(key))),
      imports: ImportSet::from([key.to_string()]),
    }
  }

  fn resolve_reference(&self, target: &str) -> Resolved {
    self.resolve_key(&ref_key(target))
  }

  fn resolve_intersection(&self, members: &[SchemaNode]) -> Resolved {
    let mut imports = ImportSet::new();
    let mut types = Vec::with_capacity(members.len());

    for member in members {
      let resolved = self.resolve(member);
      if let Some(ty) = resolved.ty {
        imports.extend(resolved.imports);
        types.push(ty);
      }
    }

    let ty = match types.len() {
      0 => None,
      1 => types.pop(),
      _ => Some(TsType::Intersection(types)),
    };
    Resolved { imports, ty }
  }

  fn resolve_enumeration(enumeration: &Enumeration) -> Resolved {
    if enumeration.values.is_empty() {
      return Resolved::absent();
    }
    Resolved::of(TsType::Union(
      enumeration.values.iter().map(|value| TsType::Literal(enum_literal(value))).collect(),
    ))
  }

  fn resolve_object(&self, shape: &ObjectShape) -> Resolved {
    match &shape.additional {
      Some(AdditionalProperties::Any) => Resolved::of(TsType::Record(Box::new(TsType::any()))),
      Some(AdditionalProperties::Schema(value)) => {
        let resolved = self.resolve(value);
        Resolved {
          imports: resolved.imports,
          ty: Some(TsType::Record(Box::new(resolved.ty.unwrap_or_else(TsType::any)))),
        }
      }
      None => {
        let (imports, properties) = self.resolve_properties(shape);
        let ty = if properties.is_empty() {
          TsType::any()
        } else {
          TsType::Object(properties)
        };
        Resolved { imports, ty: Some(ty) }
      }
    }
  }
}

/// Literal form of an enum value: strings single-quoted, everything else bare.
pub(crate) fn enum_literal(value: &EnumValue) -> String {
  match value {
    EnumValue::String(s) => quote_string(s),
    EnumValue::Number(n) => n.to_string(),
    EnumValue::Bool(b) => b.to_string(),
    EnumValue::Null => "null".to_string(),
  }
}
