//! Schema and operation conversion into the TypeScript IR.
//!
//! [`TypeResolver`] turns one classified [`SchemaNode`](crate::generator::schema::SchemaNode)
//! into a type expression plus the definition keys it depends on.
//! [`PathTransformer`] walks the document's operations, adds synthetic parameter
//! groups to the registry and produces one [`OperationContract`] per operation.

mod operations;
mod type_resolver;

pub use operations::{OperationContract, PathGroup, PathTransformer};
pub(crate) use type_resolver::enum_literal;
pub use type_resolver::{ImportSet, Resolved, TypeResolver};
