use crate::catalog::OperationDescriptor;
use crate::format;
use crate::format::FormatError;
use crate::format::SourceDialect;
use crate::synthesize::pascal_case;

/// One generated source module for a single operation.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GeneratedArtifact {
    /// The exported constant name, e.g. `NowQuery`.
    pub logical_name: String,

    /// The target file name, e.g. `NowQuery.ts`.
    pub file_name: String,

    /// The formatted module source.
    pub source_text: String,
}

impl GeneratedArtifact {
    /// Derive the exported-constant name for an operation:
    /// `PascalCase(name) + PascalCase(kind)`.
    pub fn logical_name_for(op: &OperationDescriptor) -> String {
        format!(
            "{}{}",
            pascal_case(&op.name),
            pascal_case(&op.kind.to_string()),
        )
    }

    /// Wrap a raw query document into a TypeScript module and normalize it
    /// through the formatter.
    ///
    /// A formatter rejection (the document is not valid GraphQL, e.g. after
    /// depth truncation produced an empty selection block) is fatal for the
    /// generation run; it is not recovered per-operation.
    pub fn from_document(
        op: &OperationDescriptor,
        document: &str,
    ) -> Result<Self, FormatError> {
        let logical_name = Self::logical_name_for(op);
        let raw = format!(
            "{}\n\nexport const {logical_name} = gql`\n{document}`;\n",
            format::GQL_IMPORT,
        );
        let source_text = format::format_source(&raw, SourceDialect::TypeScript)?;

        Ok(Self {
            file_name: format!("{logical_name}.ts"),
            logical_name,
            source_text,
        })
    }
}
