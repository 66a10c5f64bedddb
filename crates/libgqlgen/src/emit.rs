//! The emission driver: selects operations, turns them into artifacts, and
//! routes artifacts to stdout or the filesystem.

use crate::artifact::GeneratedArtifact;
use crate::catalog::OperationDescriptor;
use crate::catalog::OperationKind;
use crate::catalog::TypeCatalog;
use crate::format::FormatError;
use crate::synthesize::SelectionSynthesizer;
use std::fmt::Write;
use std::path::Path;
use thiserror::Error;

/// Where generated artifacts are routed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EmitMode {
    #[default]
    Print,
    Write,
}

/// How write mode behaves when a target file already exists.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WriteConflictPolicy {
    /// If ANY target file name already exists, the ENTIRE batch is withheld
    /// and nothing is written. Partial writes never occur.
    #[default]
    AllOrNothing,
}

/// Outcome of a write-mode batch. A conflict is not an error: the run
/// completes successfully having written nothing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WriteOutcome {
    /// Every artifact was written.
    Written(usize),

    /// These target files already existed; the batch was withheld.
    Conflict(Vec<String>),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Failed to write `{file_name}`: {source}")]
    Io {
        file_name: String,
        source: std::io::Error,
    },
}

/// Select the operations to generate: the kind must match and the name must
/// appear in `requested` (exact match). Results keep descriptor order.
///
/// A requested name matching no descriptor of the requested kind silently
/// yields nothing; it is not an error.
pub fn plan_operations<'a>(
    operations: &'a [OperationDescriptor],
    kind: OperationKind,
    requested: &[String],
) -> Vec<&'a OperationDescriptor> {
    operations.iter()
        .filter(|op| op.kind == kind)
        .filter(|op| requested.iter().any(|name| name == &op.name))
        .collect()
}

/// Synthesize and format one artifact per planned operation.
pub fn generate_artifacts(
    planned: &[&OperationDescriptor],
    catalog: &TypeCatalog,
    max_depth: usize,
) -> Result<Vec<GeneratedArtifact>, GenerateError> {
    let synthesizer = SelectionSynthesizer::with_max_depth(catalog, max_depth);

    let mut artifacts = Vec::with_capacity(planned.len());
    for op in planned {
        log::debug!(
            "Synthesizing `{}` (max selection depth {}).",
            op.name,
            synthesizer.max_depth(),
        );
        let document = synthesizer.synthesize(op);
        artifacts.push(GeneratedArtifact::from_document(op, &document)?);
    }

    Ok(artifacts)
}

/// Render artifacts for stdout: a `// <file name>` header line immediately
/// followed by the module source, per artifact.
pub fn render_for_print(artifacts: &[GeneratedArtifact]) -> String {
    let mut out = String::new();
    for artifact in artifacts {
        let _ = write!(
            out,
            "// {}\n{}",
            artifact.file_name,
            artifact.source_text,
        );
    }
    out
}

/// Write every artifact into `dir`, honoring the conflict policy.
///
/// Performs existence checks for the whole batch up front, then whole-file
/// writes. No directories are created.
pub fn write_artifacts(
    artifacts: &[GeneratedArtifact],
    dir: &Path,
    policy: WriteConflictPolicy,
) -> Result<WriteOutcome, GenerateError> {
    let WriteConflictPolicy::AllOrNothing = policy;

    let conflicts: Vec<String> = artifacts.iter()
        .filter(|artifact| dir.join(&artifact.file_name).exists())
        .map(|artifact| artifact.file_name.clone())
        .collect();

    if !conflicts.is_empty() {
        log::warn!(
            "Withholding the whole batch; target files already exist: {}",
            conflicts.join(", "),
        );
        return Ok(WriteOutcome::Conflict(conflicts));
    }

    for artifact in artifacts {
        std::fs::write(dir.join(&artifact.file_name), &artifact.source_text)
            .map_err(|source| GenerateError::Io {
                file_name: artifact.file_name.clone(),
                source,
            })?;
        log::debug!("Wrote `{}`.", artifact.file_name);
    }

    Ok(WriteOutcome::Written(artifacts.len()))
}
