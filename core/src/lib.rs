//! # Dockmap Core
//!
//! Engine crate for `dockmap`: everything between the Docker daemon and
//! the rendered trees.
//!
//! * [`client`]: Outbound adapter around the `bollard` Docker client.
//! * [`topology`]: Turns raw container records into queryable maps.
//! * [`reachability`]: One-hop adjacency over the topology maps.
//! * [`output`]: Tree renderers and the styling seam.
//! * [`visualize`]: Filters and the two-section topology report.
//!
//! Apart from [`client`], every module here is a pure transform: fresh
//! owned maps in, text out, no shared state between invocations.

pub mod client;
pub mod output;
pub mod reachability;
pub mod topology;
pub mod visualize;
