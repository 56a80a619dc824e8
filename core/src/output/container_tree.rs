//! Container-centric view: one container, what it can reach and through
//! which network.

use std::collections::BTreeMap;
use std::io::{self, Write};

use dockmap_common::models::ContainerInfo;

use crate::reachability::reachable_containers;

use super::{Style, TREE_BRANCH, TREE_END, TREE_SPACE, TREE_VERTICAL};

/// Prints one container's networks and the peers reachable on each.
///
/// ```text
/// Container: api
/// ├── Network: backend_net
/// │   └── connects to:
/// │       ├── postgres
/// │       └── redis
/// └── Network: frontend_net
///     └── connects to:
///         └── web_app
/// ```
///
/// Networks are rendered in ascending name order. `connects to:` is
/// always end-prefixed since it is the sole child of its network node;
/// an empty reachability result renders a `(none)` leaf instead. A
/// container with no networks renders the header line only.
pub fn print_container_tree(
    w: &mut dyn Write,
    style: &dyn Style,
    container: &ContainerInfo,
    net_map: &BTreeMap<String, Vec<ContainerInfo>>,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {}",
        style.label("Container:"),
        style.container(&container.name)
    )?;

    let networks = container.sorted_networks();
    for (i, network) in networks.iter().enumerate() {
        let last = i + 1 == networks.len();
        let prefix = if last { TREE_END } else { TREE_BRANCH };
        let indent = if last { TREE_SPACE } else { TREE_VERTICAL };

        writeln!(
            w,
            "{} {} {}",
            style.tree(prefix),
            style.label("Network:"),
            style.network(network)
        )?;
        writeln!(
            w,
            "{}{} {}",
            style.tree(indent),
            style.tree(TREE_END),
            style.label("connects to:")
        )?;

        let others = reachable_containers(&container.name, network, net_map);
        if others.is_empty() {
            writeln!(
                w,
                "{}    {} (none)",
                style.tree(indent),
                style.tree(TREE_END)
            )?;
            continue;
        }

        for (j, other) in others.iter().enumerate() {
            let other_prefix = if j + 1 == others.len() {
                TREE_END
            } else {
                TREE_BRANCH
            };
            writeln!(
                w,
                "{}    {} {}",
                style.tree(indent),
                style.tree(other_prefix),
                style.container(other)
            )?;
        }
    }

    Ok(())
}
