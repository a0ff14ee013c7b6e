pub mod merge;
pub mod spec;

pub use merge::deep_merge;
pub use spec::{SpecFormat, SpecLoader, SpecSource, load_entries};

#[cfg(test)]
mod tests;
