use std::io::{self, Write};

use dockmap_core::client::DockerClient;
use dockmap_core::topology;
use dockmap_core::visualize::render_topology;

use crate::commands::ViewArgs;
use crate::terminal::{spinner, style::ColorStyle};

pub async fn run(args: ViewArgs) -> anyhow::Result<()> {
    let cfg = args.to_config();

    let client = DockerClient::connect()?;

    let pb = spinner::start("querying the Docker daemon");
    let networks = client.list_networks().await;
    let containers = client.list_containers(true).await;
    pb.finish_and_clear();

    let networks = networks?;
    let containers = containers?;

    let container_map = topology::build_container_map(&containers);
    let net_map = topology::build_network_map(&containers);

    let style = ColorStyle::auto(cfg.no_color);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_topology(&mut out, &style, &networks, &container_map, &net_map, &cfg)?;
    out.flush()?;

    Ok(())
}
