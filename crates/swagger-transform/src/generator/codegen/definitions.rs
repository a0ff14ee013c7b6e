use super::{GeneratedFile, relative_import, render_module};
use crate::generator::{
  ast::{
    ClassConstructor, ClassDef, Declaration, Documentation, EnumDef, EnumMember, Import, InterfaceDef, TsModule, TsType,
    TypeAliasDef,
  },
  config::Config,
  converter::{ImportSet, TypeResolver, enum_literal},
  metrics::{GenerationStats, GenerationWarning},
  naming::{NamingResolver, identifiers::sanitize_identifier},
  schema::{DefinitionRegistry, Enumeration, ObjectShape, SchemaKind, SchemaNode},
};

/// One definition module, together with the keys it imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDefinition {
  pub key: String,
  pub module_name: String,
  pub file: GeneratedFile,
  /// Imported definition keys, self excluded.
  pub dependencies: ImportSet,
}

/// Renders one module per registry entry.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionEmitter<'a> {
  config: &'a Config,
  naming: NamingResolver<'a>,
  resolver: TypeResolver<'a>,
}

impl<'a> DefinitionEmitter<'a> {
  #[must_use]
  pub fn new(config: &'a Config) -> Self {
    Self {
      config,
      naming: NamingResolver::new(config),
      resolver: TypeResolver::new(config),
    }
  }

  /// Emits every definition in registry order; unresolvable ones are skipped
  /// with a warning.
  pub fn emit(&self, registry: &DefinitionRegistry, stats: &mut GenerationStats) -> Vec<EmittedDefinition> {
    registry
      .iter()
      .filter_map(|(key, node)| self.emit_definition(key, node, registry, stats))
      .collect()
  }

  pub fn emit_definition(
    &self,
    key: &str,
    node: &SchemaNode,
    registry: &DefinitionRegistry,
    stats: &mut GenerationStats,
  ) -> Option<EmittedDefinition> {
    let Some((declarations, imports)) = self.declarations(key, node, stats) else {
      stats.record_warning(GenerationWarning::UnresolvableDefinition { key: key.to_string() });
      return None;
    };

    let mut dependencies = imports;
    dependencies.remove(key);

    let module_name = self.naming.module_name(key);
    let module = TsModule {
      header: self.config.description.clone(),
      imports: self.imports_for(key, &dependencies, registry, stats),
      declarations,
    };

    Some(EmittedDefinition {
      key: key.to_string(),
      file: GeneratedFile::new(&self.config.out_dir, &module_name, render_module(&module)),
      module_name,
      dependencies,
    })
  }

  fn declarations(
    &self,
    key: &str,
    node: &SchemaNode,
    stats: &mut GenerationStats,
  ) -> Option<(Vec<Declaration>, ImportSet)> {
    let docs = Documentation::from_optional(node.description.as_deref());

    match &node.kind {
      SchemaKind::Enumeration(enumeration) if enumeration.has_symbolic_names() => {
        stats.record_enum();
        let mut declarations = vec![Declaration::Enum(self.enum_def(key, enumeration, docs))];
        declarations.extend(self.wrapper_alias(key, stats));
        Some((declarations, ImportSet::new()))
      }
      SchemaKind::Object(shape) => Some(self.object_declarations(key, shape, docs, stats)),
      _ => {
        let resolved = self.resolver.resolve(node);
        let ty = resolved.ty?;
        Some((self.alias_declarations(key, ty, docs, stats), resolved.imports))
      }
    }
  }

  fn object_declarations(
    &self,
    key: &str,
    shape: &ObjectShape,
    docs: Documentation,
    stats: &mut GenerationStats,
  ) -> (Vec<Declaration>, ImportSet) {
    let declaration_name = self.naming.declaration_name(key);
    let (imports, properties) = self.resolver.resolve_properties(shape);

    if !properties.is_empty() {
      stats.record_interface();
      let mut declarations = vec![Declaration::Interface(
        InterfaceDef::builder()
          .name(&declaration_name)
          .docs(docs)
          .properties(properties.clone())
          .build(),
      )];
      if self.config.wrapper_mode() {
        stats.record_class();
        declarations.push(Declaration::Class(
          ClassDef::builder()
            .name(self.naming.wrapper_name(key))
            .properties(properties)
            .init_type(declaration_name)
            .constructor(ClassConstructor::Fields)
            .build(),
        ));
      }
      return (declarations, imports);
    }

    if shape.additional.is_some() {
      let resolved = self.resolver.resolve(&SchemaNode::new(SchemaKind::Object(shape.clone())));
      let ty = resolved.ty.unwrap_or_else(|| TsType::Record(Box::new(TsType::any())));
      return (self.alias_declarations(key, ty, docs, stats), resolved.imports);
    }

    stats.record_type_alias();
    let mut declarations = vec![Declaration::TypeAlias(
      TypeAliasDef::builder()
        .name(&declaration_name)
        .docs(docs)
        .ty(TsType::Record(Box::new(TsType::any())))
        .build(),
    )];
    if self.config.wrapper_mode() {
      stats.record_class();
      declarations.push(Declaration::Class(
        ClassDef::builder()
          .name(self.naming.wrapper_name(key))
          .init_type(declaration_name)
          .constructor(ClassConstructor::AssignAll)
          .build(),
      ));
    }
    (declarations, ImportSet::new())
  }

  fn alias_declarations(
    &self,
    key: &str,
    ty: TsType,
    docs: Documentation,
    stats: &mut GenerationStats,
  ) -> Vec<Declaration> {
    stats.record_type_alias();
    let mut declarations = vec![Declaration::TypeAlias(
      TypeAliasDef::builder()
        .name(self.naming.declaration_name(key))
        .docs(docs)
        .ty(ty)
        .build(),
    )];
    declarations.extend(self.wrapper_alias(key, stats));
    declarations
  }

  /// `export type XClass = X` for declarations that have no runtime class.
  fn wrapper_alias(&self, key: &str, stats: &mut GenerationStats) -> Option<Declaration> {
    if !self.config.wrapper_mode() {
      return None;
    }
    stats.record_companion_alias();
    Some(Declaration::TypeAlias(
      TypeAliasDef::builder()
        .name(self.naming.wrapper_name(key))
        .ty(TsType::named(self.naming.declaration_name(key)))
        .build(),
    ))
  }

  fn enum_def(&self, key: &str, enumeration: &Enumeration, docs: Documentation) -> EnumDef {
    let members = enumeration
      .members()
      .map(|(name, value)| EnumMember {
        name: sanitize_identifier(name),
        value: enum_literal(value),
        docs: Documentation::from_optional(enumeration.comments.get(name).map(String::as_str)),
      })
      .collect();

    EnumDef::builder()
      .name(self.naming.declaration_name(key))
      .docs(docs)
      .members(members)
      .build()
  }

  /// Whether `node` produces a module; mirrors the branches of `declarations`.
  pub(crate) fn is_emittable(&self, node: &SchemaNode) -> bool {
    match &node.kind {
      SchemaKind::Object(_) => true,
      SchemaKind::Enumeration(enumeration) if enumeration.has_symbolic_names() => true,
      _ => self.resolver.resolve(node).ty.is_some(),
    }
  }

  /// One `import type` per dependency that has a module of its own.
  fn imports_for(
    &self,
    key: &str,
    dependencies: &ImportSet,
    registry: &DefinitionRegistry,
    stats: &mut GenerationStats,
  ) -> Vec<Import> {
    dependencies
      .iter()
      .filter(|dependency| {
        let known = registry.get(dependency).is_some_and(|node| self.is_emittable(node));
        if !known {
          stats.record_warning(GenerationWarning::UnknownReference {
            key: key.to_string(),
            target: (*dependency).clone(),
          });
        }
        known
      })
      .map(|dependency| Import::Type {
        names: vec![self.naming.type_name(dependency)],
        from: relative_import(&self.config.out_dir, &self.config.out_dir, &self.naming.module_name(dependency)),
      })
      .collect()
  }
}
