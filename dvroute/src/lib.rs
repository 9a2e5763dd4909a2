//! A synchronous simulation of distance-vector (Bellman-Ford) routing.
//!
//! Each node only learns from the tables advertised by its direct neighbours, and all nodes
//! exchange tables in lock-step rounds until nothing changes.

pub mod concepts;
pub mod feedback;
pub mod framework;
pub mod graph;
pub mod router;
pub mod sim;
pub mod store;
pub mod util;
