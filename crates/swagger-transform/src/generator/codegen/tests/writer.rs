use crate::generator::{ast::Documentation, codegen::CodeWriter};

#[test]
fn test_lines_follow_depth() {
  let mut writer = CodeWriter::new();
  writer.line("a {");
  writer.indent();
  writer.line("b");
  writer.line("");
  writer.dedent();
  writer.dedent();
  writer.line("}");

  assert_eq!(writer.depth(), 0, "dedent saturates at zero");
  assert_eq!(writer.finish(), "a {\n  b\n\n}\n", "empty lines carry no indentation");
}

#[test]
fn test_blank_never_doubles() {
  let mut writer = CodeWriter::new();
  writer.blank();
  writer.line("a");
  writer.blank();
  writer.blank();
  writer.line("b");

  assert_eq!(writer.finish(), "a\n\nb\n");
}

#[test]
fn test_block_with_docs() {
  let mut writer = CodeWriter::new();
  writer.block("x {", "}", |w| {
    w.docs(&Documentation::from_raw("first\nsecond"));
    w.line("y");
  });

  assert_eq!(writer.finish(), "x {\n  /**\n   * first\n   * second\n   */\n  y\n}\n");
}
