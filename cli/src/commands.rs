pub mod ping;
pub mod visualize;

use clap::{Args, Parser, Subcommand};
use dockmap_common::config::Config;

#[derive(Parser)]
#[command(name = "dockmap")]
#[command(about = "Visualize Docker network topology in a tree-style format.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show networks, containers and their reachability
    #[command(alias = "v")]
    Visualize(ViewArgs),
    /// Check connectivity to the Docker daemon
    #[command(alias = "p")]
    Ping,
}

#[derive(Args, Clone, Default)]
pub struct ViewArgs {
    /// Show only the specified network
    #[arg(long, env = "DOCKMAP_ONLY_NETWORK")]
    pub only_network: Option<String>,

    /// Show only the specified container's connectivity
    #[arg(long, env = "DOCKMAP_CONTAINER")]
    pub container: Option<String>,

    /// Hide container aliases in the output
    #[arg(long, env = "DOCKMAP_NO_ALIASES")]
    pub no_aliases: bool,

    /// Disable colored output
    #[arg(long, env = "DOCKMAP_NO_COLOR")]
    pub no_color: bool,
}

impl ViewArgs {
    pub fn to_config(&self) -> Config {
        Config {
            only_network: self.only_network.clone(),
            container: self.container.clone(),
            no_aliases: self.no_aliases,
            no_color: self.no_color,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
