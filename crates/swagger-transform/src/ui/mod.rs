pub mod cli;
pub mod colors;
pub mod commands;
pub mod config_file;

pub use cli::{Cli, Commands, GenerateCommand, ListCommands, NameCase};
pub use colors::Colors;

const FALLBACK_WIDTH: u16 = 80;

fn term_width() -> u16 {
  crossterm::terminal::size().map_or(FALLBACK_WIDTH, |(width, _)| width)
}
