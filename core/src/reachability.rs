//! One-hop reachability over the network map.

use std::collections::BTreeMap;

use dockmap_common::models::ContainerInfo;

/// Returns the sorted names of the other containers on `network`.
///
/// `self_name` is excluded by exact name equality; if two distinct
/// containers share a resolved name they exclude each other, which
/// follows from the name-keyed topology. An unknown network is an empty
/// bucket, not an error.
pub fn reachable_containers(
    self_name: &str,
    network: &str,
    net_map: &BTreeMap<String, Vec<ContainerInfo>>,
) -> Vec<String> {
    let mut result: Vec<String> = net_map
        .get(network)
        .map(|bucket| {
            bucket
                .iter()
                .filter(|container| container.name != self_name)
                .map(|container| container.name.clone())
                .collect()
        })
        .unwrap_or_default();

    result.sort();
    result
}
