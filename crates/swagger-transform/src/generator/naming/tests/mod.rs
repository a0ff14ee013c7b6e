mod identifiers;
mod operations;
mod resolver;
