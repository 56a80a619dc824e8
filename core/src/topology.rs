//! Topology construction: raw container records in, name-keyed and
//! network-keyed maps out.
//!
//! The builders are pure data transforms. They never fail: a record with
//! no names resolves to the empty-string name, a record with no network
//! memberships lands in the container map but in no network bucket, and
//! an endpoint without an alias list contributes zero aliases.

use std::collections::BTreeMap;

use dockmap_common::models::ContainerInfo;

/// Raw container data as reported by the daemon, before resolution.
///
/// `names` carries the daemon's name entries verbatim, leading slash and
/// all. `networks` maps a network name to that endpoint's alias list;
/// `None` means the daemon reported no alias list for the endpoint.
#[derive(Debug, Clone, Default)]
pub struct ContainerRecord {
    pub names: Vec<String>,
    pub networks: BTreeMap<String, Option<Vec<String>>>,
}

impl ContainerRecord {
    /// Resolved display name: first name entry with one leading `/`
    /// stripped, or the empty string when there are no entries.
    pub fn display_name(&self) -> String {
        match self.names.first() {
            Some(name) => name.strip_prefix('/').unwrap_or(name).to_string(),
            None => String::new(),
        }
    }
}

/// Builds a map from container name to [`ContainerInfo`].
///
/// When two records resolve to the same display name the later record
/// overwrites the earlier one. That mirrors the daemon's
/// one-name-per-container common case; duplicates are not merged.
pub fn build_container_map(records: &[ContainerRecord]) -> BTreeMap<String, ContainerInfo> {
    let mut map = BTreeMap::new();

    for record in records {
        let name = record.display_name();
        let mut info = ContainerInfo::new(name.clone());

        for (network, aliases) in &record.networks {
            info.add_network(network);
            for alias in aliases.iter().flatten() {
                info.add_alias(alias);
            }
        }

        map.insert(name, info);
    }

    map
}

/// Builds a map from network name to the containers attached to it.
///
/// Buckets hold owned copies of the resolved [`ContainerInfo`] values,
/// sorted ascending by container name, so the result is deterministic
/// regardless of record order and stays valid however the container map
/// is used afterwards. Network keys come strictly from the observed
/// memberships: a network nobody is attached to never appears here.
pub fn build_network_map(records: &[ContainerRecord]) -> BTreeMap<String, Vec<ContainerInfo>> {
    let containers = build_container_map(records);
    let mut map: BTreeMap<String, Vec<ContainerInfo>> = BTreeMap::new();

    for record in records {
        let name = record.display_name();
        let Some(info) = containers.get(&name) else {
            continue;
        };

        for network in record.networks.keys() {
            map.entry(network.clone()).or_default().push(info.clone());
        }
    }

    for bucket in map.values_mut() {
        bucket.sort_by(|a, b| a.name.cmp(&b.name));
    }

    map
}
