use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgqlgen::OperationKind;
use libgqlgen::TypeCatalog;

#[derive(Debug, clap::Args)]
pub(crate) struct ListCmd {
    #[arg(help="URL of the GraphQL endpoint to introspect.")]
    url: String,

    #[arg(help="Operation kind to list: `query` or `mutation`.")]
    kind: OperationKind,
}

#[inherent::inherent]
impl RunnableCommand for ListCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
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

        let (operations, _catalog) = TypeCatalog::from_document(&doc);
        let names: Vec<&str> =
            operations.iter()
                .filter(|op| op.kind == self.kind)
                .map(|op| op.name.as_str())
                .collect();
        log::debug!(
            "Found {} `{}` operations at `{}`.",
            names.len(),
            self.kind,
            self.url,
        );

        if names.is_empty() {
            CommandResult::silent()
        } else {
            CommandResult::stdout(format_args!("{}", names.join("\n")))
        }
    }
}
