mod synthesize_tests;

use crate::ast;
use crate::catalog::OperationDescriptor;
use crate::catalog::TypeCatalog;

/// Parse SDL and build the (operations, catalog) pair, panicking on parse
/// errors. Test fixtures are always valid SDL.
pub(crate) fn build_catalog(
    sdl: &str,
) -> (Vec<OperationDescriptor>, TypeCatalog) {
    let doc = ast::schema::parse(sdl)
        .expect("test fixture SDL parses");
    TypeCatalog::from_document(&doc)
}
