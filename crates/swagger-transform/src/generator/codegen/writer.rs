use crate::generator::ast::{Documentation, INDENT};

/// Line-oriented text buffer that tracks the current indentation depth.
#[derive(Debug, Default)]
pub struct CodeWriter {
  out: String,
  depth: usize,
}

impl CodeWriter {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Writes `text` at the current depth.
  ///
  /// Embedded newlines are kept verbatim, so multi-line type expressions must
  /// already carry their own inner indentation.
  pub fn line(&mut self, text: impl AsRef<str>) {
    let text = text.as_ref();
    if !text.is_empty() {
      for _ in 0..self.depth {
        self.out.push_str(INDENT);
      }
      self.out.push_str(text);
    }
    self.out.push('\n');
  }

  /// Separates sections by exactly one empty line.
  pub fn blank(&mut self) {
    if !self.out.is_empty() && !self.out.ends_with("\n\n") {
      self.out.push('\n');
    }
  }

  pub fn docs(&mut self, docs: &Documentation) {
    for line in docs.render() {
      self.line(line);
    }
  }

  pub fn indent(&mut self) {
    self.depth += 1;
  }

  pub fn dedent(&mut self) {
    self.depth = self.depth.saturating_sub(1);
  }

  #[must_use]
  pub fn depth(&self) -> usize {
    self.depth
  }

  /// Writes `open`, the indented body, then `close`.
  pub fn block(&mut self, open: impl AsRef<str>, close: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
    self.line(open);
    self.indent();
    body(self);
    self.dedent();
    self.line(close);
  }

  #[must_use]
  pub fn finish(self) -> String {
    self.out
  }
}
