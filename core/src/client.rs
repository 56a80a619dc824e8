//! Outbound adapter around the `bollard` Docker client.
//!
//! Everything fallible in this crate lives here: the daemon is the only
//! IO boundary. List fetches come back converted into the shared models
//! and sorted by name, so downstream transforms stay pure; the inspect
//! passthroughs return the daemon's full payloads, which carry far more
//! than the topology models keep.

use std::collections::BTreeMap;

use bollard::Docker;
use bollard::container::{InspectContainerOptions, ListContainersOptions};
use bollard::models::{ContainerInspectResponse, ContainerSummary, Network};
use bollard::network::{InspectNetworkOptions, ListNetworksOptions};
use tracing::debug;

use dockmap_common::models::NetworkInfo;

use crate::topology::ContainerRecord;

/// Errors from talking to the Docker daemon, each wrapping the
/// underlying API error with the operation that failed.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to connect to the Docker daemon")]
    Connect(#[source] bollard::errors::Error),

    #[error("failed to ping the Docker daemon")]
    Ping(#[source] bollard::errors::Error),

    #[error("failed to list Docker networks")]
    ListNetworks(#[source] bollard::errors::Error),

    #[error("failed to list Docker containers")]
    ListContainers(#[source] bollard::errors::Error),

    #[error("failed to inspect Docker network {name}")]
    InspectNetwork {
        name: String,
        #[source]
        source: bollard::errors::Error,
    },

    #[error("failed to inspect Docker container {id}")]
    InspectContainer {
        id: String,
        #[source]
        source: bollard::errors::Error,
    },
}

/// Thin wrapper over [`bollard::Docker`] returning the shared models.
pub struct DockerClient {
    docker: Docker,
}

impl DockerClient {
    /// Connects using the environment's defaults (`DOCKER_HOST` or the
    /// local socket).
    pub fn connect() -> Result<Self, ClientError> {
        let docker = Docker::connect_with_local_defaults().map_err(ClientError::Connect)?;
        Ok(Self { docker })
    }

    /// Wraps an existing connection. Mainly for injecting a custom
    /// transport in tests.
    pub fn with_docker(docker: Docker) -> Self {
        Self { docker }
    }

    /// Verifies the daemon is reachable.
    pub async fn ping(&self) -> Result<(), ClientError> {
        self.docker.ping().await.map_err(ClientError::Ping)?;
        Ok(())
    }

    /// Lists all networks, sorted ascending by name.
    pub async fn list_networks(&self) -> Result<Vec<NetworkInfo>, ClientError> {
        let networks = self
            .docker
            .list_networks(None::<ListNetworksOptions<String>>)
            .await
            .map_err(ClientError::ListNetworks)?;
        debug!(count = networks.len(), "fetched networks");

        let mut infos: Vec<NetworkInfo> = networks.into_iter().map(network_info).collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(infos)
    }

    /// Lists containers as raw topology records, sorted ascending by
    /// resolved display name. `all` includes stopped containers.
    pub async fn list_containers(&self, all: bool) -> Result<Vec<ContainerRecord>, ClientError> {
        let opts = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };
        let containers = self
            .docker
            .list_containers(Some(opts))
            .await
            .map_err(ClientError::ListContainers)?;
        debug!(count = containers.len(), "fetched containers");

        let mut records: Vec<ContainerRecord> =
            containers.into_iter().map(container_record).collect();
        records.sort_by_key(ContainerRecord::display_name);
        Ok(records)
    }

    /// Inspects a network by id or name.
    pub async fn inspect_network(&self, name: &str) -> Result<Network, ClientError> {
        self.docker
            .inspect_network(name, None::<InspectNetworkOptions<String>>)
            .await
            .map_err(|source| ClientError::InspectNetwork {
                name: name.to_string(),
                source,
            })
    }

    /// Inspects a container by id or name.
    pub async fn inspect_container(
        &self,
        id: &str,
    ) -> Result<ContainerInspectResponse, ClientError> {
        self.docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(|source| ClientError::InspectContainer {
                id: id.to_string(),
                source,
            })
    }
}

fn network_info(network: Network) -> NetworkInfo {
    NetworkInfo::new(
        network.name.unwrap_or_default(),
        network.driver.unwrap_or_default(),
    )
}

fn container_record(summary: ContainerSummary) -> ContainerRecord {
    let names = summary.names.unwrap_or_default();
    let networks: BTreeMap<String, Option<Vec<String>>> = summary
        .network_settings
        .and_then(|settings| settings.networks)
        .unwrap_or_default()
        .into_iter()
        .map(|(name, endpoint)| (name, endpoint.aliases))
        .collect();

    ContainerRecord { names, networks }
}
