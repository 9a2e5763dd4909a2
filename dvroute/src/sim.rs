use std::cmp::max;
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use crate::concepts::route::Route;
use crate::concepts::table::RouteTable;
use crate::feedback::{Result, RoutingError};
use crate::framework::{ProtocolParams, RoutingSystem};
#[cfg(feature = "serde")]
use crate::framework::Metric;
use crate::graph::Graph;
use crate::router::relax;
use crate::store::RouteStore;
use crate::util::shortest_paths;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SimState {
    Running,
    /// a full round changed nothing
    Converged,
}

/// Drives every node's table to a fixed point in synchronous rounds.
///
/// Each round reads a snapshot of the previous round's tables, so the order in which nodes are
/// visited never matters.
pub struct Simulation<T: RoutingSystem + ?Sized> {
    graph: Graph<T>,
    store: RouteStore<T>,
    params: ProtocolParams,
    round: usize,
    state: SimState,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
struct FrozenState<T: RoutingSystem + ?Sized> {
    round: usize,
    converged: bool,
    store: RouteStore<T>,
}

impl<T: RoutingSystem + ?Sized> Simulation<T> {
    pub fn new(graph: Graph<T>) -> Result<Self, T> {
        Self::with_params(graph, T::config())
    }

    pub fn with_params(graph: Graph<T>, params: ProtocolParams) -> Result<Self, T> {
        if params.validate_symmetry {
            graph.validate()?;
        }
        let store = RouteStore::initialize(&graph)?;
        Ok(Self {
            graph,
            store,
            params,
            round: 0,
            state: SimState::Running,
        })
    }

    /// Maximum number of rounds before the run is considered broken
    pub fn ceiling(&self) -> usize {
        max(self.graph.len(), 1) * max(self.params.max_round_factor, 1)
    }

    /// Runs a single synchronous round, returns true if any table changed.
    ///
    /// Stepping an already converged simulation still runs the round, it just never changes anything.
    pub fn step(&mut self) -> Result<bool, T> {
        let snapshot = self.store.snapshot();
        let mut changed = false;

        let nodes: Vec<T::NodeAddress> = self.graph.nodes().cloned().collect();
        for node in &nodes {
            let table = self.store.get_mut(node)?;
            for neigh in self.graph.neighbours(node)? {
                let advertised = snapshot.get(&neigh.addr)?;
                changed = relax(node, table, &neigh.addr, advertised, neigh.link_cost) || changed;
            }
        }

        if changed {
            self.round += 1;
            debug!("Round {} updated routes", self.round);
        } else {
            self.state = SimState::Converged;
        }
        Ok(changed)
    }

    /// Runs rounds until no table changes, returns the number of rounds that changed a table. The
    /// final quiet round only marks the transition to [`SimState::Converged`] and is not counted.
    pub fn run(&mut self) -> Result<usize, T> {
        self.run_with(|_, _| {})
    }

    /// Like [`Simulation::run`], but hands the tables to `observer` at the start of every round.
    ///
    /// Rounds are numbered from 1, the first call sees the initial tables and the last call sees the
    /// converged tables.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<usize, T>
    where
        F: FnMut(usize, &RouteStore<T>),
    {
        let start = self.round;
        let ceiling = self.ceiling();
        let mut executed = 0;
        loop {
            if self.round - start >= ceiling {
                return Err(RoutingError::ConvergenceFailure {
                    rounds: self.round - start,
                    ceiling,
                });
            }
            executed += 1;
            observer(executed, &self.store);
            if !self.step()? {
                break;
            }
        }
        let rounds = self.round - start;
        info!("Converged after {rounds} rounds");
        Ok(rounds)
    }

    /// Checks every route against the globally computed shortest paths. Only valid for
    /// non-negative weights.
    pub fn verify(&self) -> Result<(), T> {
        for node in self.graph.nodes() {
            let expected = shortest_paths(&self.graph, node)?;
            let table = self.store.get(node)?;
            for dest in self.graph.nodes() {
                let want = expected.get(dest).copied();
                let actual = table.metric_to(dest);
                if want != actual {
                    return Err(RoutingError::RouteMismatch {
                        node: node.clone(),
                        dest: dest.clone(),
                        expected: want,
                        actual,
                    });
                }
            }
        }
        Ok(())
    }

    /// The current table of a single node
    pub fn table(&self, node: &T::NodeAddress) -> Result<&RouteTable<T>, T> {
        self.store.get(node)
    }

    pub fn store(&self) -> &RouteStore<T> {
        &self.store
    }

    pub fn graph(&self) -> &Graph<T> {
        &self.graph
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    /// Number of rounds so far that changed at least one table
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_converged(&self) -> bool {
        self.state == SimState::Converged
    }

    #[cfg(feature = "serde")]
    pub fn freeze(&self) -> serde_json::Result<String> {
        serde_json::to_string(&FrozenState {
            round: self.round,
            converged: self.is_converged(),
            store: self.store.clone(),
        })
    }

    /// Restores tables saved with [`Simulation::freeze`] on top of `graph`.
    ///
    /// The graph goes through the same checks as [`Simulation::with_params`], and every saved table
    /// must belong to a node of `graph` and still hold its self route.
    #[cfg(feature = "serde")]
    pub fn restore(graph: Graph<T>, params: ProtocolParams, state: &str) -> Result<Self, T> {
        if params.validate_symmetry {
            graph.validate()?;
        }
        let frozen: FrozenState<T> = serde_json::from_str(state)
            .map_err(|err| RoutingError::InvalidState { reason: err.to_string() })?;

        for (node, table) in frozen.store.iter() {
            if !graph.contains(node) {
                return Err(RoutingError::UnknownNode { node: node.clone() });
            }
            if table.address != *node {
                return Err(RoutingError::InvalidState {
                    reason: format!("table of {} is stored under {node}", table.address),
                });
            }
            if table.get(node) != Some(&Route::new(T::Metric::ZERO, node.clone())) {
                return Err(RoutingError::InvalidState {
                    reason: format!("table of {node} lost its self route"),
                });
            }
        }
        if let Some(node) = graph.nodes().find(|node| frozen.store.get(node).is_err()) {
            return Err(RoutingError::InvalidState {
                reason: format!("no table saved for {node}"),
            });
        }

        Ok(Self {
            graph,
            store: frozen.store,
            params,
            round: frozen.round,
            state: if frozen.converged { SimState::Converged } else { SimState::Running },
        })
    }
}
