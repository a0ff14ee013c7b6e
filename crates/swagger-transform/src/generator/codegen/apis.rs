use std::path::Path;

use super::{DefinitionEmitter, GeneratedFile, relative_import, render_module};
use crate::generator::{
  ast::{
    ConstEntry, ConstObjectDef, Declaration, Documentation, FunctionDef, FunctionParam, Import, InterfaceDef,
    PropItem, TsModule, TsType,
  },
  config::{ApiConfig, Config},
  converter::{ImportSet, OperationContract, PathGroup},
  metrics::{GenerationStats, GenerationWarning},
  naming::{
    NamingResolver,
    identifiers::{is_identifier, quote_string},
  },
  schema::DefinitionRegistry,
};

const REQUEST_CONFIG_TYPE: &str = "Record<string, any>";

/// Renders the route map, the combined contract and the request functions.
#[derive(Debug, Clone, Copy)]
pub struct ApiEmitter<'a> {
  config: &'a Config,
  api: &'a ApiConfig,
  naming: NamingResolver<'a>,
  definitions: DefinitionEmitter<'a>,
}

impl<'a> ApiEmitter<'a> {
  #[must_use]
  pub fn new(config: &'a Config, api: &'a ApiConfig) -> Self {
    Self {
      config,
      api,
      naming: NamingResolver::new(config),
      definitions: DefinitionEmitter::new(config),
    }
  }

  /// `export const Apis = { getPets: '/pets/{id}', ... } as const`
  #[must_use]
  pub fn route_map(&self, groups: &[PathGroup]) -> GeneratedFile {
    let entries = operations(groups)
      .map(|operation| ConstEntry {
        key: operation.name.clone(),
        value: quote_string(&operation.path),
        docs: Documentation::from_optional(operation.description.as_deref()),
      })
      .collect();

    let module = TsModule {
      header: self.config.description.clone(),
      imports: vec![],
      declarations: vec![Declaration::ConstObject(
        ConstObjectDef::builder()
          .name(&self.api.export_name)
          .entries(entries)
          .build(),
      )],
    };

    GeneratedFile::new(self.config.api_out_dir(), &self.api.file_name, render_module(&module))
  }

  /// `export interface AllApis { '/path': { method: { responses, ... } } }`
  pub fn contract(
    &self,
    groups: &[PathGroup],
    registry: &DefinitionRegistry,
    stats: &mut GenerationStats,
  ) -> GeneratedFile {
    let properties = groups
      .iter()
      .map(|group| PropItem {
        key: group.path.clone(),
        ty: TsType::Object(
          group
            .operations
            .iter()
            .map(|operation| PropItem {
              key: operation.method.to_string(),
              ty: operation.contract_type(),
              required: true,
              description: operation.description.clone(),
            })
            .collect(),
        ),
        required: true,
        description: None,
      })
      .collect();

    let out_dir = self.config.out_dir.as_path();
    let (imports, unknown) = self.type_imports(out_dir, &collect_imports(groups), registry);
    stats.record_warnings(unknown.into_iter().map(|target| GenerationWarning::UnknownReference {
      key: self.api.type_name.clone(),
      target,
    }));

    let module = TsModule {
      header: self.config.description.clone(),
      imports,
      declarations: vec![Declaration::Interface(
        InterfaceDef::builder()
          .name(&self.api.type_name)
          .properties(properties)
          .build(),
      )],
    };

    GeneratedFile::new(out_dir, &self.api.type_file_name, render_module(&module))
  }

  /// One request function per operation, or the template's output when one is set.
  pub fn functions(
    &self,
    groups: &[PathGroup],
    registry: &DefinitionRegistry,
    stats: &mut GenerationStats,
  ) -> GeneratedFile {
    let api_dir = self.config.api_out_dir();

    let mut imports = vec![
      Import::Raw(self.api.function_import.clone()),
      Import::Value {
        names: vec![self.api.export_name.clone()],
        from: relative_import(api_dir, api_dir, &self.api.file_name),
      },
    ];
    imports.extend(self.type_imports(api_dir, &collect_imports(groups), registry).0);

    let declarations: Vec<Declaration> = operations(groups)
      .map(|operation| match &self.api.function_template {
        Some(template) => Declaration::Raw(template.render(&operation.signature())),
        None => Declaration::Function(self.function_def(operation)),
      })
      .collect();
    stats.record_functions(declarations.len());

    let module = TsModule {
      header: self.config.description.clone(),
      imports,
      declarations,
    };

    GeneratedFile::new(api_dir, &self.api.function_file_name, render_module(&module))
  }

  fn function_def(&self, operation: &OperationContract) -> FunctionDef {
    let mut params = vec![
      FunctionParam::new("payload", operation.payload()),
      FunctionParam::new(
        "path",
        operation.path_params.clone().unwrap_or_else(TsType::undefined),
      ),
      FunctionParam::new("config", TsType::named(REQUEST_CONFIG_TYPE)).optional(),
    ];
    for param in params.iter_mut().rev().skip(1) {
      if !param.ty.is_undefined() {
        break;
      }
      param.optional = true;
    }

    let responses = operation
      .responses
      .as_ref()
      .map_or_else(|| TsType::UNDEFINED.to_string(), |ty| ty.render(1));
    let route = if is_identifier(&operation.name) {
      format!("{}.{}", self.api.export_name, operation.name)
    } else {
      format!("{}[{}]", self.api.export_name, quote_string(&operation.name))
    };

    FunctionDef::builder()
      .name(&operation.function_name)
      .docs(Documentation::from_optional(operation.description.as_deref()))
      .params(params)
      .body(vec![format!(
        "return request<{responses}>({}, {route}, payload, path, config)",
        quote_string(&operation.method.to_string()),
      )])
      .build()
  }

  /// Type imports for `keys` as seen from `from_dir`, plus the keys that have no module.
  fn type_imports(
    &self,
    from_dir: &Path,
    keys: &ImportSet,
    registry: &DefinitionRegistry,
  ) -> (Vec<Import>, Vec<String>) {
    let mut imports = Vec::with_capacity(keys.len());
    let mut unknown = Vec::new();

    for key in keys {
      if !registry.get(key).is_some_and(|node| self.definitions.is_emittable(node)) {
        unknown.push(key.clone());
        continue;
      }
      imports.push(Import::Type {
        names: vec![self.naming.type_name(key)],
        from: relative_import(from_dir, &self.config.out_dir, &self.naming.module_name(key)),
      });
    }

    (imports, unknown)
  }
}

fn operations(groups: &[PathGroup]) -> impl Iterator<Item = &OperationContract> {
  groups.iter().flat_map(|group| &group.operations)
}

fn collect_imports(groups: &[PathGroup]) -> ImportSet {
  operations(groups)
    .flat_map(|operation| operation.imports.iter().cloned())
    .collect()
}
