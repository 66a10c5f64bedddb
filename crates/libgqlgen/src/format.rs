use crate::ast;
use thiserror::Error;

/// Source dialects the formatter understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceDialect {
    TypeScript,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Source text is not a recognizable generated module")]
    MalformedModule,

    #[error("Embedded GraphQL document failed to parse: {0}")]
    Parse(#[from] ast::query::ParseError),
}

pub(crate) const GQL_IMPORT: &str = "import { gql } from \"graphql-tag\";";

const EXPORT_PREFIX: &str = "export const ";

/// Normalize a generated source module.
///
/// Deterministic and idempotent for well-formed input; errors on input that
/// is not syntactically valid for the dialect. For the TypeScript dialect
/// this validates the module shape (import line, one exported `gql` template
/// constant), parses the embedded GraphQL document, and re-renders the whole
/// module from the parsed document in canonical layout.
pub fn format_source(
    source: &str,
    dialect: SourceDialect,
) -> Result<String, FormatError> {
    match dialect {
        SourceDialect::TypeScript => format_typescript(source),
    }
}

fn format_typescript(source: &str) -> Result<String, FormatError> {
    let logical_name = extract_logical_name(source)
        .ok_or(FormatError::MalformedModule)?;
    let template = extract_template(source)
        .ok_or(FormatError::MalformedModule)?;

    // Rejects grammar-invalid documents, e.g. an empty selection block left
    // behind by depth truncation reaching an empty object type.
    let doc = ast::query::parse(template)?;

    Ok(render_module(logical_name, &doc))
}

fn render_module(
    logical_name: &str,
    doc: &ast::query::Document,
) -> String {
    // graphql-parser's printer ends the document with a newline, so the
    // closing backtick lands on its own line.
    format!("{GQL_IMPORT}\n\nexport const {logical_name} = gql`\n{doc}`;\n")
}

fn extract_logical_name(source: &str) -> Option<&str> {
    let start = source.find(EXPORT_PREFIX)? + EXPORT_PREFIX.len();
    let rest = &source[start..];
    let end = rest.find(" =")?;
    let name = rest[..end].trim();
    if name.is_empty() {
        return None;
    }
    Some(name)
}

fn extract_template(source: &str) -> Option<&str> {
    let start = source.find('`')? + 1;
    let end = source.rfind('`')?;
    if end < start {
        return None;
    }
    Some(&source[start..end])
}
