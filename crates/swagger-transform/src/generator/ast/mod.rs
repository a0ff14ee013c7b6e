mod documentation;
mod types;


pub use documentation::Documentation;
pub(crate) use types::INDENT;
pub use types::{PropItem, TsType};

/// One generated `.ts` file before rendering.
#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct TsModule {
  /// Free-form banner placed above everything else.
  #[builder(into)]
  pub header: Option<String>,
  #[builder(default)]
  pub imports: Vec<Import>,
  #[builder(default)]
  pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Import {
  /// `import type { A, B } from './from'`
  Type { names: Vec<String>, from: String },
  /// `import { A } from './from'`
  Value { names: Vec<String>, from: String },
  /// A user-supplied import line, written verbatim.
  Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
  Interface(InterfaceDef),
  Class(ClassDef),
  Enum(EnumDef),
  TypeAlias(TypeAliasDef),
  ConstObject(ConstObjectDef),
  Function(FunctionDef),
  /// `export * from './module'`
  ReExport(String),
  /// Pre-rendered text, written verbatim.
  Raw(String),
}

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct InterfaceDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub properties: Vec<PropItem>,
}

/// How a wrapper class fills its fields from `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassConstructor {
  /// One assignment per declared field.
  Fields,
  /// `Object.assign(this, init)`.
  AssignAll,
}

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct ClassDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub properties: Vec<PropItem>,
  /// Type of the constructor's `init` argument.
  #[builder(into)]
  pub init_type: String,
  pub constructor: ClassConstructor,
}

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct EnumDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
  pub name: String,
  /// Rendered literal value.
  pub value: String,
  pub docs: Documentation,
}

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct TypeAliasDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  pub ty: TsType,
}

/// `export const Name = { ... } as const`
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ConstObjectDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub entries: Vec<ConstEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstEntry {
  pub key: String,
  /// Rendered literal value.
  pub value: String,
  pub docs: Documentation,
}

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct FunctionDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub params: Vec<FunctionParam>,
  /// Statements, one per line.
  #[builder(default)]
  pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParam {
  pub name: String,
  pub ty: TsType,
  pub optional: bool,
}

impl FunctionParam {
  #[must_use]
  pub fn new(name: impl Into<String>, ty: TsType) -> Self {
    Self {
      name: name.into(),
      ty,
      optional: false,
    }
  }

  #[must_use]
  pub fn optional(mut self) -> Self {
    self.optional = true;
    self
  }
}

/// Operation data handed to a [`FunctionTemplate`](crate::FunctionTemplate).
///
/// Types are already rendered; slots the operation lacks hold `undefined`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct FunctionSignature {
  /// Function identifier.
  #[builder(into)]
  pub name: String,
  /// Key of the operation in the route map.
  #[builder(into)]
  pub route_key: String,
  /// Lower-case HTTP method.
  #[builder(into)]
  pub method: String,
  #[builder(into)]
  pub description: Option<String>,
  #[builder(into)]
  pub payload: String,
  #[builder(into)]
  pub path: String,
  #[builder(into)]
  pub header: String,
  #[builder(into)]
  pub responses: String,
}
