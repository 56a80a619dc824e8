//! Filtering and the two-section topology report.
//!
//! This is the thin layer between fetched data and the tree renderers:
//! it applies the exact-match name filters, strips aliases when asked,
//! and frames each render block with section headers and blank lines.

use std::collections::BTreeMap;
use std::io::{self, Write};

use dockmap_common::config::Config;
use dockmap_common::models::{ContainerInfo, NetworkInfo};

use crate::output::{Style, print_container_tree, print_network_tree};

/// Renders the full report: a network tree per network, then a
/// reachability tree per container, each block followed by a blank line.
///
/// `networks` drives the first section so that networks without any
/// attached container still appear (the network map only knows networks
/// with members). Containers render in ascending name order.
pub fn render_topology(
    w: &mut dyn Write,
    style: &dyn Style,
    networks: &[NetworkInfo],
    container_map: &BTreeMap<String, ContainerInfo>,
    net_map: &BTreeMap<String, Vec<ContainerInfo>>,
    cfg: &Config,
) -> io::Result<()> {
    writeln!(w, "=== Networks ===")?;

    for network in networks {
        if let Some(only) = &cfg.only_network {
            if network.name != *only {
                continue;
            }
        }

        let members = net_map.get(&network.name).map(Vec::as_slice).unwrap_or(&[]);
        if cfg.no_aliases {
            let stripped = strip_aliases(members);
            print_network_tree(w, style, network, &stripped)?;
        } else {
            print_network_tree(w, style, network, members)?;
        }
        writeln!(w)?;
    }

    writeln!(w, "=== Containers (Reachability) ===")?;

    for (name, container) in container_map {
        if let Some(filter) = &cfg.container {
            if name != filter {
                continue;
            }
        }

        print_container_tree(w, style, container, net_map)?;
        writeln!(w)?;
    }

    Ok(())
}

/// Copies the list with every alias dropped. The source is untouched.
pub fn strip_aliases(containers: &[ContainerInfo]) -> Vec<ContainerInfo> {
    containers
        .iter()
        .map(|container| ContainerInfo {
            name: container.name.clone(),
            aliases: Vec::new(),
            networks: container.networks.clone(),
        })
        .collect()
}
