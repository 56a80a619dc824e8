//! Network-centric view: one network, who is attached to it.

use std::io::{self, Write};

use dockmap_common::models::{ContainerInfo, NetworkInfo};

use super::{Style, TREE_BRANCH, TREE_END, TREE_SPACE, TREE_VERTICAL};

/// Prints one network and its attached containers as a tree.
///
/// ```text
/// Network: frontend_net (bridge)
/// ├── api
/// │   └── alias: api
/// └── web_app
///     ├── alias: web
///     └── alias: web.local
/// ```
///
/// Containers are rendered in ascending name order, each container's
/// aliases in ascending order beneath it; a container without aliases
/// gets no alias lines at all. An empty container list renders a single
/// `└── (no containers)` line under the header.
pub fn print_network_tree(
    w: &mut dyn Write,
    style: &dyn Style,
    network: &NetworkInfo,
    containers: &[ContainerInfo],
) -> io::Result<()> {
    writeln!(
        w,
        "{} {} ({})",
        style.label("Network:"),
        style.network(&network.name),
        network.driver
    )?;

    if containers.is_empty() {
        writeln!(w, "{} (no containers)", style.tree(TREE_END))?;
        return Ok(());
    }

    let mut sorted = containers.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    for (i, container) in sorted.iter().enumerate() {
        let last = i + 1 == sorted.len();
        let prefix = if last { TREE_END } else { TREE_BRANCH };
        let indent = if last { TREE_SPACE } else { TREE_VERTICAL };

        writeln!(
            w,
            "{} {}",
            style.tree(prefix),
            style.container(&container.name)
        )?;

        let aliases = container.sorted_aliases();
        for (j, alias) in aliases.iter().enumerate() {
            let alias_prefix = if j + 1 == aliases.len() {
                TREE_END
            } else {
                TREE_BRANCH
            };
            writeln!(
                w,
                "{}{} {} {}",
                style.tree(indent),
                style.tree(alias_prefix),
                style.label("alias:"),
                style.alias(alias)
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Plain;

    fn render(network: &NetworkInfo, containers: &[ContainerInfo]) -> String {
        let mut buf = Vec::new();
        print_network_tree(&mut buf, &Plain, network, containers).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn container(name: &str, aliases: &[&str]) -> ContainerInfo {
        let mut info = ContainerInfo::new(name);
        for alias in aliases {
            info.add_alias(alias);
        }
        info
    }

    #[test]
    fn empty_network_renders_placeholder() {
        let net = NetworkInfo::new("empty_net", "bridge");
        assert_eq!(
            render(&net, &[]),
            "Network: empty_net (bridge)\n└── (no containers)\n"
        );
    }

    #[test]
    fn containers_and_aliases_are_sorted() {
        let net = NetworkInfo::new("frontend_net", "bridge");
        let containers = vec![
            container("web_app", &["web.local", "web"]),
            container("api", &["api"]),
        ];

        assert_eq!(
            render(&net, &containers),
            "Network: frontend_net (bridge)\n\
             ├── api\n\
             │   └── alias: api\n\
             └── web_app\n    \
                 ├── alias: web\n    \
                 └── alias: web.local\n"
        );
    }

    #[test]
    fn container_without_aliases_gets_no_alias_lines() {
        let net = NetworkInfo::new("backend", "bridge");
        let out = render(&net, &[container("redis", &[])]);

        assert_eq!(out, "Network: backend (bridge)\n└── redis\n");
    }

    #[test]
    fn alias_indent_follows_container_position() {
        let net = NetworkInfo::new("n", "bridge");
        let containers = vec![container("a", &["x"]), container("b", &["y"])];
        let out = render(&net, &containers);

        // Non-last container continues with the vertical bar, the last
        // one with plain spaces.
        assert!(out.contains("│   └── alias: x"));
        assert!(out.contains("    └── alias: y"));
    }

    #[test]
    fn input_list_is_not_mutated() {
        let net = NetworkInfo::new("n", "bridge");
        let containers = vec![container("zeta", &[]), container("alpha", &[])];

        render(&net, &containers);
        assert_eq!(containers[0].name, "zeta");
        assert_eq!(containers[1].name, "alpha");
    }

    #[test]
    fn empty_driver_renders_empty_parens() {
        let net = NetworkInfo::new("nameless_driver", "");
        let out = render(&net, &[]);
        assert!(out.starts_with("Network: nameless_driver ()\n"));
    }
}
