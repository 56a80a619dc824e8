use dockmap_core::client::DockerClient;
use tracing::info;

pub async fn run() -> anyhow::Result<()> {
    let client = DockerClient::connect()?;
    client.ping().await?;

    info!("Docker daemon is reachable");
    Ok(())
}
