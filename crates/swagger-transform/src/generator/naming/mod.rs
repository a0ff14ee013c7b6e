pub mod identifiers;
pub mod operations;
mod resolver;

pub use resolver::NamingResolver;

#[cfg(test)]
mod tests;
