use educe::Educe;
use thiserror::Error;
use crate::framework::RoutingSystem;

/// These errors are fatal to a simulation run, no partially converged tables are surfaced after one.
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug(bound()), PartialEq(bound()))]
pub enum RoutingError<T: RoutingSystem + ?Sized> {
    /// A weight was requested for two nodes that are not directly linked
    #[error("No edge between {from} and {to}")]
    UnknownEdge {
        from: T::NodeAddress,
        to: T::NodeAddress,
    },
    /// Only raised when symmetry validation is enabled. `reverse` is None if the reverse edge is missing entirely
    #[error("Asymmetric link {from} -> {to}: weight {forward}, reverse weight {}", display_metric(.reverse))]
    AsymmetricWeight {
        from: T::NodeAddress,
        to: T::NodeAddress,
        forward: T::Metric,
        reverse: Option<T::Metric>,
    },
    #[error("Node {node} is not part of the graph")]
    UnknownNode {
        node: T::NodeAddress
    },
    /// The loop ran past its safety ceiling. This means the graph violates the non-negative weight precondition
    #[error("Routing tables did not converge within {rounds} rounds (ceiling {ceiling}), is there a negative weight cycle?")]
    ConvergenceFailure {
        rounds: usize,
        ceiling: usize,
    },
    /// A converged cost disagrees with the globally computed shortest path
    #[error("Route from {node} to {dest} has cost {}, expected {}", display_metric(.actual), display_metric(.expected))]
    RouteMismatch {
        node: T::NodeAddress,
        dest: T::NodeAddress,
        expected: Option<T::Metric>,
        actual: Option<T::Metric>,
    },
    /// Saved tables could not be loaded, or do not belong to the graph they are restored onto
    #[error("Unable to restore routing tables: {reason}")]
    InvalidState {
        reason: String,
    },
}

fn display_metric<M: std::fmt::Display>(metric: &Option<M>) -> String {
    match metric {
        Some(m) => m.to_string(),
        None => "none".to_string(),
    }
}

/// Although this is an error enum, these should be treated as warnings.
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug(bound()))]
pub enum RoutingWarning<T: RoutingSystem + ?Sized> {
    /// Negative weights break the convergence guarantee, the run may hit the round ceiling.
    #[error("Link {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: T::NodeAddress,
        to: T::NodeAddress,
        weight: T::Metric,
    },
    /// A link from a node to itself never produces a route, the self route (cost 0) always wins.
    #[error("Node {node} has a link to itself, it will be ignored for routing")]
    SelfLink {
        node: T::NodeAddress
    },
    /// The edge was defined more than once, the last definition wins.
    #[error("Link {from} - {to} defined more than once, using weight {weight}")]
    DuplicateEdge {
        from: T::NodeAddress,
        to: T::NodeAddress,
        weight: T::Metric,
    },
}

pub type Result<V, T> = std::result::Result<V, RoutingError<T>>;
