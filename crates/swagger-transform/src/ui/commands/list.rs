use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use crossterm::style::Stylize;
use itertools::Itertools;
use swagger_transform::{generator::operation_registry::OperationRegistry, utils::load_entries};

use crate::ui::{Colors, colors::to_comfy, term_width};

pub async fn list_operations(inputs: &[String], colors: &Colors) -> anyhow::Result<()> {
  let document = load_entries(inputs).await?;
  let registry = OperationRegistry::new(&document);

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["OPERATION", "METHOD", "PATH"] {
    header.add_cell(Cell::new(title).fg(to_comfy(colors.label())));
  }
  table.set_header(header);

  for entry in registry.operations().sorted_by(|a, b| a.name.cmp(&b.name)) {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&entry.name)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(entry.method.to_string().to_uppercase())
        .fg(to_comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&entry.path).fg(to_comfy(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  for warning in registry.warnings() {
    eprintln!(
      "{} {}",
      "Warning:".with(colors.accent()),
      warning.to_string().with(colors.primary())
    );
  }

  Ok(())
}
