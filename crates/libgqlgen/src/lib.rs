//! Schema-to-operation code generation for GraphQL services.
//!
//! `libgqlgen` introspects a GraphQL endpoint, indexes the object types its
//! schema declares into a [`TypeCatalog`], and mechanically synthesizes one
//! typed operation module per requested root field. Selection sets are
//! expanded recursively over the catalog, bounded only by a maximum depth.
//!
//! The pieces compose left to right:
//!
//! 1. [`fetch_sdl`] + [`parse_sdl`]: fetch the schema over HTTP via the
//!    standard introspection query and round-trip it through printed SDL.
//! 2. [`TypeCatalog::from_document`]: index object types and collect one
//!    [`OperationDescriptor`] per root field under `Query`/`Mutation`.
//! 3. [`SelectionSynthesizer`]: render the query document for one operation.
//! 4. [`GeneratedArtifact`] + [`emit`]: wrap documents into source modules,
//!    then print them or write them to disk.

pub mod ast;
mod artifact;
mod catalog;
pub mod emit;
mod format;
mod introspect;
mod synthesize;
mod type_ref;

pub use artifact::GeneratedArtifact;
pub use catalog::FieldDescriptor;
pub use catalog::OperationDescriptor;
pub use catalog::OperationKind;
pub use catalog::OperationKindParseError;
pub use catalog::TypeCatalog;
pub use format::FormatError;
pub use format::SourceDialect;
pub use format::format_source;
pub use introspect::IntrospectError;
pub use introspect::SchemaParseError;
pub use introspect::fetch_sdl;
pub use introspect::parse_sdl;
pub use synthesize::DEFAULT_MAX_DEPTH;
pub use synthesize::SelectionSynthesizer;
pub use synthesize::pascal_case;
pub use type_ref::TypeRef;

#[cfg(test)]
mod tests;
