mod generate;
mod list;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use list::ListCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlgen")]
pub(crate) enum CommandEnum {
    /// List the operations a GraphQL service exposes.
    List(Box<ListCmd>),

    /// Generate one typed operation source per requested operation.
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::List(cmd) => cmd.run(cli).await,
        }
    }
}
