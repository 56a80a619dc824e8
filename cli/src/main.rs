mod commands;
mod terminal;

use commands::{CommandLine, Commands, ping, visualize};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();

    logging::init();

    match cli.command {
        Some(Commands::Visualize(args)) => visualize::run(args).await,
        Some(Commands::Ping) => ping::run().await,
        // No subcommand: visualize with the root-level flags, so plain
        // `dockmap` does the obvious thing.
        None => visualize::run(cli.view).await,
    }
}
