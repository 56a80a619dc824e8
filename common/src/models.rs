pub mod container;
pub mod network;

pub use container::ContainerInfo;
pub use network::NetworkInfo;
