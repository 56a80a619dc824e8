/// Network-facing view of a single container.
///
/// Holds the container's display name, its network-scoped aliases and the
/// networks it is attached to. Aliases and networks behave as small sets:
/// no duplicates, exact string membership. Both stay in insertion order;
/// callers that need a stable order take the `sorted_*` views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Display name without the daemon's leading slash, e.g. `web_app`
    /// rather than `/web_app`. Empty when the daemon reported no names.
    pub name: String,

    /// Network-scoped aliases the container can be reached by.
    pub aliases: Vec<String>,

    /// Names of the networks this container is attached to.
    pub networks: Vec<String>,
}

impl ContainerInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            networks: Vec::new(),
        }
    }

    /// Adds an alias unless it is already present.
    /// Returns whether the alias was added.
    pub fn add_alias(&mut self, alias: &str) -> bool {
        if self.aliases.iter().any(|existing| existing == alias) {
            return false;
        }
        self.aliases.push(alias.to_string());
        true
    }

    /// Adds a network membership unless it is already present.
    /// Returns whether the network was added.
    pub fn add_network(&mut self, network: &str) -> bool {
        if self.networks.iter().any(|existing| existing == network) {
            return false;
        }
        self.networks.push(network.to_string());
        true
    }

    pub fn has_network(&self, network: &str) -> bool {
        self.networks.iter().any(|existing| existing == network)
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|existing| existing == alias)
    }

    /// Ascending-sorted copy of the network names. The source is untouched.
    pub fn sorted_networks(&self) -> Vec<String> {
        let mut sorted = self.networks.clone();
        sorted.sort();
        sorted
    }

    /// Ascending-sorted copy of the aliases. The source is untouched.
    pub fn sorted_aliases(&self) -> Vec<String> {
        let mut sorted = self.aliases.clone();
        sorted.sort();
        sorted
    }

    pub fn network_count(&self) -> usize {
        self.networks.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
