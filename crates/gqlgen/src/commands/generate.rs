use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgqlgen::OperationKind;
use libgqlgen::TypeCatalog;
use libgqlgen::emit;
use libgqlgen::emit::EmitMode;
use libgqlgen::emit::WriteConflictPolicy;
use libgqlgen::emit::WriteOutcome;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(help="URL of the GraphQL endpoint to introspect.")]
    url: String,

    #[arg(help="Operation kind to generate: `query` or `mutation`.")]
    kind: OperationKind,

    #[arg(
        help="Names of the operations to generate. Names that match no \
             operation of the requested kind are skipped.",
        name="OPERATIONS",
    )]
    operations: Vec<String>,

    #[arg(
        help="Write one file per operation into the current directory \
             instead of printing to stdout. If any target file already \
             exists, the whole batch is skipped.",
        long,
    )]
    write: bool,

    #[arg(
        default_value_t=libgqlgen::DEFAULT_MAX_DEPTH,
        help="Maximum number of nested object hops to select.",
        long,
    )]
    max_depth: usize,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        // Nothing requested, nothing to do -- and no network round-trip.
        if self.operations.is_empty() {
            log::debug!("No operations requested; nothing to generate.");
            return CommandResult::silent();
        }

        let sdl = match libgqlgen::fetch_sdl(&self.url).await {
            Ok(sdl) => sdl,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to introspect `{}`: {e}",
                output_utils::RED_X,
                self.url,
            )),
        };

        let doc = match libgqlgen::parse_sdl(&sdl) {
            Ok(doc) => doc,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Schema from `{}` is unusable: {e}",
                output_utils::RED_X,
                self.url,
            )),
        };

        let (descriptors, catalog) = TypeCatalog::from_document(&doc);
        let planned = emit::plan_operations(
            &descriptors,
            self.kind,
            &self.operations,
        );

        let artifacts = match emit::generate_artifacts(
            &planned,
            &catalog,
            self.max_depth,
        ) {
            Ok(artifacts) => artifacts,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Generation failed: {e}",
                output_utils::RED_X,
            )),
        };

        // Requested names that matched nothing are not an error; with no
        // artifacts there is nothing to print or write.
        if artifacts.is_empty() {
            return CommandResult::silent();
        }

        let mode = if self.write { EmitMode::Write } else { EmitMode::Print };
        match mode {
            EmitMode::Print => {
                let rendered = emit::render_for_print(&artifacts);
                CommandResult::stdout(format_args!("{}", rendered.trim_end()))
            },

            EmitMode::Write => {
                let cwd = match std::env::current_dir() {
                    Ok(cwd) => cwd,
                    Err(e) => return CommandResult::stderr(format_args!(
                        "{} Cannot resolve the current directory: {e}",
                        output_utils::RED_X,
                    )),
                };

                match emit::write_artifacts(
                    &artifacts,
                    &cwd,
                    WriteConflictPolicy::AllOrNothing,
                ) {
                    Ok(WriteOutcome::Written(count)) =>
                        CommandResult::stdout(format_args!(
                            "{} Wrote {count} file(s).",
                            output_utils::GREEN_CHECK,
                        )),

                    // Not an error: the batch is withheld wholesale, but
                    // the user should hear why nothing appeared.
                    Ok(WriteOutcome::Conflict(file_names)) =>
                        CommandResult::stdout(format_args!(
                            "{} Skipped all {} file(s); these already \
                            exist: {}",
                            output_utils::WARNING_SIGN,
                            artifacts.len(),
                            file_names.join(", "),
                        )),

                    Err(e) => CommandResult::stderr(format_args!(
                        "{} Write failed: {e}",
                        output_utils::RED_X,
                    )),
                }
            },
        }
    }
}
