use super::{GeneratedFile, relative_import, render_module};
use crate::generator::{
  ast::{Declaration, TsModule},
  config::Config,
};

const INDEX_MODULE: &str = "index";

/// `index.ts` re-exporting the contract module (when the API is enabled) and
/// every definition module, in that order.
#[must_use]
pub fn render_index<'m>(config: &'m Config, modules: impl IntoIterator<Item = &'m str>) -> GeneratedFile {
  let out_dir = config.out_dir.as_path();
  let contract = config.api.as_ref().map(|api| api.type_file_name.as_str());

  let declarations = contract
    .into_iter()
    .chain(modules)
    .map(|module| Declaration::ReExport(relative_import(out_dir, out_dir, module)))
    .collect();

  let module = TsModule {
    header: config.description.clone(),
    imports: vec![],
    declarations,
  };

  GeneratedFile::new(out_dir, INDEX_MODULE, render_module(&module))
}
