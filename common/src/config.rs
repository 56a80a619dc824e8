/// Resolved output options for a single visualize run.
///
/// The CLI layer owns flag parsing and env lookups; by the time data
/// reaches the orchestration layer everything has been flattened into
/// these plain values.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Restrict the network view to this exact network name.
    pub only_network: Option<String>,

    /// Restrict the reachability view to this exact container name.
    pub container: Option<String>,

    /// Strip aliases from the network view.
    pub no_aliases: bool,

    /// Disable colored output.
    pub no_color: bool,
}
