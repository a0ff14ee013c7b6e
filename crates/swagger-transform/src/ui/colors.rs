use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Ansi256Color, AnsiColor, Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// Colors of every output role for one theme.
struct Palette {
  timestamp: Color,
  primary: Color,
  accent: Color,
  info: Color,
  success: Color,
  label: Color,
  value: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

const DARK: Palette = Palette {
  timestamp: rgb(128, 150, 170),
  primary: rgb(86, 156, 214),
  accent: rgb(206, 145, 120),
  info: rgb(156, 220, 254),
  success: rgb(106, 153, 85),
  label: rgb(78, 201, 176),
  value: rgb(220, 220, 170),
};

const LIGHT: Palette = Palette {
  timestamp: rgb(96, 96, 96),
  primary: rgb(0, 92, 197),
  accent: rgb(163, 21, 21),
  info: rgb(0, 112, 193),
  success: rgb(0, 128, 0),
  label: rgb(38, 127, 153),
  value: rgb(121, 94, 38),
};

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn palette(&self) -> &'static Palette {
    match self.theme {
      Theme::Dark => &DARK,
      Theme::Light => &LIGHT,
    }
  }

  const fn pick(&self, color: Color) -> Color {
    if self.enabled { color } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(self.palette().timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(self.palette().primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(self.palette().accent)
  }

  pub const fn info(&self) -> Color {
    self.pick(self.palette().info)
  }

  pub const fn success(&self) -> Color {
    self.pick(self.palette().success)
  }

  pub const fn label(&self) -> Color {
    self.pick(self.palette().label)
  }

  pub const fn value(&self) -> Color {
    self.pick(self.palette().value)
  }

  /// Help-screen styles, always in the dark palette.
  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(to_clap(colors.label())))
      .literal(Style::new().fg_color(to_clap(colors.primary())))
      .placeholder(Style::new().fg_color(to_clap(colors.info())))
      .error(Style::new().bold().fg_color(to_clap(colors.accent())))
      .valid(Style::new().fg_color(to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(to_clap(colors.accent())))
  }
}

const fn to_clap(color: Color) -> Option<ClapColor> {
  match color {
    Color::Reset => None,
    Color::Black => Some(ClapColor::Ansi(AnsiColor::Black)),
    Color::DarkGrey | Color::Grey => Some(ClapColor::Ansi(AnsiColor::BrightBlack)),
    Color::Red | Color::DarkRed => Some(ClapColor::Ansi(AnsiColor::Red)),
    Color::Green | Color::DarkGreen => Some(ClapColor::Ansi(AnsiColor::Green)),
    Color::Yellow | Color::DarkYellow => Some(ClapColor::Ansi(AnsiColor::Yellow)),
    Color::Blue | Color::DarkBlue => Some(ClapColor::Ansi(AnsiColor::Blue)),
    Color::Magenta | Color::DarkMagenta => Some(ClapColor::Ansi(AnsiColor::Magenta)),
    Color::Cyan | Color::DarkCyan => Some(ClapColor::Ansi(AnsiColor::Cyan)),
    Color::White => Some(ClapColor::Ansi(AnsiColor::White)),
    Color::AnsiValue(value) => Some(ClapColor::Ansi256(Ansi256Color(value))),
    Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
  }
}

/// Table cell color for a terminal color.
pub fn to_comfy(color: Color) -> ComfyColor {
  match color {
    Color::Reset => ComfyColor::Reset,
    Color::Black => ComfyColor::Black,
    Color::DarkGrey => ComfyColor::DarkGrey,
    Color::Grey => ComfyColor::Grey,
    Color::Red => ComfyColor::Red,
    Color::DarkRed => ComfyColor::DarkRed,
    Color::Green => ComfyColor::Green,
    Color::DarkGreen => ComfyColor::DarkGreen,
    Color::Yellow => ComfyColor::Yellow,
    Color::DarkYellow => ComfyColor::DarkYellow,
    Color::Blue => ComfyColor::Blue,
    Color::DarkBlue => ComfyColor::DarkBlue,
    Color::Magenta => ComfyColor::Magenta,
    Color::DarkMagenta => ComfyColor::DarkMagenta,
    Color::Cyan => ComfyColor::Cyan,
    Color::DarkCyan => ComfyColor::DarkCyan,
    Color::White => ComfyColor::White,
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => std::env::var("COLORFGBG")
      .ok()
      .and_then(|value| theme_from_colorfgbg(&value))
      .unwrap_or(Theme::Dark),
  }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); background codes 7 and
/// 9 to 15 are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
  let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
  Some(if background == 7 || background >= 9 {
    Theme::Light
  } else {
    Theme::Dark
  })
}
