/// JSDoc block attached to a declaration, member or property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  /// Splits on newlines (literal `\n` escapes included), trims trailing
  /// whitespace and drops leading/trailing blank lines.
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    let normalized = input.replace("\\n", "\n").replace("*/", "*\\/");
    let lines: Vec<String> = normalized.lines().map(|line| line.trim_end().to_string()).collect();

    let start = lines.iter().position(|line| !line.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|line| !line.is_empty()).map_or(start, |i| i + 1);

    Self {
      lines: lines[start..end].to_vec(),
    }
  }

  #[must_use]
  pub fn from_optional(desc: Option<&str>) -> Self {
    desc.map_or_else(Self::default, Self::from_raw)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// Comment text without indentation: `/** x */` for one line, a `*`-prefixed block otherwise.
  #[must_use]
  pub fn render(&self) -> Vec<String> {
    match self.lines.as_slice() {
      [] => vec![],
      [single] => vec![format!("/** {single} */")],
      lines => {
        let mut out = Vec::with_capacity(lines.len() + 2);
        out.push("/**".to_string());
        out.extend(lines.iter().map(|line| {
          if line.is_empty() {
            " *".to_string()
          } else {
            format!(" * {line}")
          }
        }));
        out.push(" */".to_string());
        out
      }
    }
  }
}
