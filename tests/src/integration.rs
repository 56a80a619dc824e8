//! End-to-end pipeline tests: raw records in, complete two-section
//! report out, compared byte for byte.

use std::collections::BTreeMap;

use dockmap_common::config::Config;
use dockmap_common::models::NetworkInfo;
use dockmap_core::output::Plain;
use dockmap_core::reachability::reachable_containers;
use dockmap_core::topology::{ContainerRecord, build_container_map, build_network_map};
use dockmap_core::visualize::render_topology;

fn record(name: &str, networks: &[(&str, &[&str])]) -> ContainerRecord {
    ContainerRecord {
        names: vec![format!("/{name}")],
        networks: networks
            .iter()
            .map(|(net, aliases)| {
                let aliases = aliases.iter().map(|a| a.to_string()).collect();
                (net.to_string(), Some(aliases))
            })
            .collect(),
    }
}

/// A small two-network compose-style stack: `api` bridges frontend and
/// backend, `web_app` faces frontend only, `postgres` and `redis` sit
/// on backend.
fn stack() -> (Vec<NetworkInfo>, Vec<ContainerRecord>) {
    let networks = vec![
        NetworkInfo::new("backend", "bridge"),
        NetworkInfo::new("frontend", "bridge"),
    ];
    let records = vec![
        record("api", &[("frontend", &["api"]), ("backend", &["api"])]),
        record("web_app", &[("frontend", &["web", "web.local"])]),
        record("postgres", &[("backend", &["db"])]),
        record("redis", &[("backend", &[])]),
    ];
    (networks, records)
}

fn render(networks: &[NetworkInfo], records: &[ContainerRecord], cfg: &Config) -> String {
    let container_map = build_container_map(records);
    let net_map = build_network_map(records);
    let mut buf = Vec::new();
    render_topology(&mut buf, &Plain, networks, &container_map, &net_map, cfg).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn full_report_for_a_two_network_stack() {
    let (networks, records) = stack();
    let out = render(&networks, &records, &Config::default());

    let expected = "\
=== Networks ===
Network: backend (bridge)
├── api
│   └── alias: api
├── postgres
│   └── alias: db
└── redis

Network: frontend (bridge)
├── api
│   └── alias: api
└── web_app
    ├── alias: web
    └── alias: web.local

=== Containers (Reachability) ===
Container: api
├── Network: backend
│   └── connects to:
│       ├── postgres
│       └── redis
└── Network: frontend
    └── connects to:
        └── web_app

Container: postgres
└── Network: backend
    └── connects to:
        ├── api
        └── redis

Container: redis
└── Network: backend
    └── connects to:
        ├── api
        └── postgres

Container: web_app
└── Network: frontend
    └── connects to:
        └── api

";
    assert_eq!(out, expected);
}

#[test]
fn report_is_stable_under_record_permutation() {
    let (networks, mut records) = stack();
    let baseline = render(&networks, &records, &Config::default());

    records.reverse();
    assert_eq!(render(&networks, &records, &Config::default()), baseline);

    records.swap(1, 3);
    assert_eq!(render(&networks, &records, &Config::default()), baseline);
}

#[test]
fn reachability_matches_the_rendered_report() {
    let (_, records) = stack();
    let net_map = build_network_map(&records);

    assert_eq!(
        reachable_containers("api", "backend", &net_map),
        vec!["postgres", "redis"]
    );
    assert_eq!(
        reachable_containers("web_app", "frontend", &net_map),
        vec!["api"]
    );
}

#[test]
fn filtered_report_shows_one_network_and_one_container() {
    let (networks, records) = stack();
    let cfg = Config {
        only_network: Some("frontend".to_string()),
        container: Some("web_app".to_string()),
        ..Config::default()
    };
    let out = render(&networks, &records, &cfg);

    let expected = "\
=== Networks ===
Network: frontend (bridge)
├── api
│   └── alias: api
└── web_app
    ├── alias: web
    └── alias: web.local

=== Containers (Reachability) ===
Container: web_app
└── Network: frontend
    └── connects to:
        └── api

";
    assert_eq!(out, expected);
}

#[test]
fn no_aliases_report_drops_every_alias_line() {
    let (networks, records) = stack();
    let cfg = Config {
        no_aliases: true,
        ..Config::default()
    };
    let out = render(&networks, &records, &cfg);

    assert!(!out.contains("alias:"));
    assert!(out.contains("├── api\n├── postgres\n└── redis\n"));
}

#[test]
fn unnamed_container_flows_through_the_whole_pipeline() {
    let unnamed = ContainerRecord {
        names: Vec::new(),
        networks: BTreeMap::from([("bridge".to_string(), None)]),
    };
    let networks = vec![NetworkInfo::new("bridge", "bridge")];
    let out = render(&networks, &[unnamed], &Config::default());

    // Empty display name renders as an empty semantic token.
    assert!(out.contains("Container: \n"));
    assert!(out.contains("└── Network: bridge\n"));
}

#[test]
fn daemon_network_without_members_renders_placeholder() {
    let networks = vec![
        NetworkInfo::new("backend", "bridge"),
        NetworkInfo::new("none", "null"),
    ];
    let records = vec![record("api", &[("backend", &[])])];
    let out = render(&networks, &records, &Config::default());

    assert!(out.contains("Network: none (null)\n└── (no containers)\n"));
}
