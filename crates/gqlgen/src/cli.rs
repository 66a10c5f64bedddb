use crate::commands;
use clap::CommandFactory;

#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlgen",
    version,
    about = "Introspects a GraphQL service and generates typed operation \
            sources.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
