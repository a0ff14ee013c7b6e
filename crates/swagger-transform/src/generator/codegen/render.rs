use super::CodeWriter;
use crate::generator::{
  ast::{
    ClassConstructor, ClassDef, ConstObjectDef, Declaration, Documentation, EnumDef, FunctionDef, FunctionParam,
    Import, InterfaceDef, PropItem, TsModule, TypeAliasDef,
  },
  naming::identifiers::{is_plain_field, property_key, quote_string},
};

/// Renders a module to TypeScript source.
///
/// Sections are separated by one empty line; consecutive re-exports stay together.
#[must_use]
pub fn render_module(module: &TsModule) -> String {
  let mut writer = CodeWriter::new();

  if let Some(header) = &module.header {
    writer.docs(&Documentation::from_raw(header));
    writer.blank();
  }

  for import in &module.imports {
    writer.line(render_import(import));
  }
  writer.blank();

  let mut previous: Option<&Declaration> = None;
  for declaration in &module.declarations {
    if !matches!(
      (previous, declaration),
      (Some(Declaration::ReExport(_)), Declaration::ReExport(_))
    ) {
      writer.blank();
    }
    render_declaration(&mut writer, declaration);
    previous = Some(declaration);
  }

  writer.finish()
}

fn render_import(import: &Import) -> String {
  match import {
    Import::Type { names, from } => format!("import type {{ {} }} from {}", names.join(", "), quote_string(from)),
    Import::Value { names, from } => format!("import {{ {} }} from {}", names.join(", "), quote_string(from)),
    Import::Raw(line) => line.clone(),
  }
}

fn render_declaration(writer: &mut CodeWriter, declaration: &Declaration) {
  match declaration {
    Declaration::Interface(def) => render_interface(writer, def),
    Declaration::Class(def) => render_class(writer, def),
    Declaration::Enum(def) => render_enum(writer, def),
    Declaration::TypeAlias(def) => render_type_alias(writer, def),
    Declaration::ConstObject(def) => render_const_object(writer, def),
    Declaration::Function(def) => render_function(writer, def),
    Declaration::ReExport(module) => writer.line(format!("export * from {}", quote_string(module))),
    Declaration::Raw(text) => {
      for line in text.trim_end().lines() {
        writer.line(line);
      }
    }
  }
}

fn render_properties(writer: &mut CodeWriter, properties: &[PropItem]) {
  for property in properties {
    writer.docs(&property.docs());
    writer.line(property.signature(writer.depth()));
  }
}

fn render_interface(writer: &mut CodeWriter, def: &InterfaceDef) {
  writer.docs(&def.docs);
  if def.properties.is_empty() {
    writer.line(format!("export interface {} {{}}", def.name));
    return;
  }
  writer.block(format!("export interface {} {{", def.name), "}", |w| {
    render_properties(w, &def.properties);
  });
}

fn render_class(writer: &mut CodeWriter, def: &ClassDef) {
  writer.docs(&def.docs);
  writer.block(format!("export class {} {{", def.name), "}", |w| {
    match def.constructor {
      ClassConstructor::Fields => render_properties(w, &def.properties),
      ClassConstructor::AssignAll => w.line("[key: string]: any"),
    }
    w.blank();
    w.block(format!("constructor(init: {}) {{", def.init_type), "}", |w| match def.constructor {
      ClassConstructor::Fields => {
        for property in &def.properties {
          let access = field_access(&property.key);
          w.line(format!("this{access} = init{access}"));
        }
      }
      ClassConstructor::AssignAll => w.line("Object.assign(this, init)"),
    });
  });
}

/// `.key` for plain alphanumeric keys, `['key']` for everything else.
fn field_access(key: &str) -> String {
  if is_plain_field(key) {
    format!(".{key}")
  } else {
    format!("[{}]", quote_string(key))
  }
}

fn render_enum(writer: &mut CodeWriter, def: &EnumDef) {
  writer.docs(&def.docs);
  writer.block(format!("export enum {} {{", def.name), "}", |w| {
    for member in &def.members {
      w.docs(&member.docs);
      w.line(format!("{} = {},", member.name, member.value));
    }
  });
}

fn render_type_alias(writer: &mut CodeWriter, def: &TypeAliasDef) {
  writer.docs(&def.docs);
  writer.line(format!("export type {} = {}", def.name, def.ty.render(writer.depth())));
}

fn render_const_object(writer: &mut CodeWriter, def: &ConstObjectDef) {
  writer.block(format!("export const {} = {{", def.name), "} as const", |w| {
    for entry in &def.entries {
      w.docs(&entry.docs);
      w.line(format!("{}: {},", property_key(&entry.key), entry.value));
    }
  });
}

fn render_function(writer: &mut CodeWriter, def: &FunctionDef) {
  let params = def.params.iter().map(render_param).collect::<Vec<_>>().join(", ");
  writer.docs(&def.docs);
  writer.block(format!("export function {}({params}) {{", def.name), "}", |w| {
    for statement in &def.body {
      w.line(statement);
    }
  });
}

fn render_param(param: &FunctionParam) -> String {
  let marker = if param.optional { "?" } else { "" };
  format!("{}{marker}: {}", param.name, param.ty.render(0))
}
