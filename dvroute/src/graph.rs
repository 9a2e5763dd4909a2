use std::collections::BTreeMap;
use educe::Educe;
use log::warn;
use crate::concepts::neighbour::Neighbour;
use crate::feedback::{Result, RoutingError, RoutingWarning};
use crate::framework::{Metric, RoutingSystem};

/// Immutable weighted topology.
///
/// Links are stored per direction, an undirected link is two entries with the same weight.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
pub struct Graph<T: RoutingSystem + ?Sized> {
    adj: BTreeMap<T::NodeAddress, BTreeMap<T::NodeAddress, T::Metric>>,
}

impl<T: RoutingSystem + ?Sized> Default for Graph<T> {
    fn default() -> Self {
        Self { adj: BTreeMap::new() }
    }
}

impl<T: RoutingSystem + ?Sized> Graph<T> {
    /// Builds a graph from undirected `(a, b, weight)` links
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (T::NodeAddress, T::NodeAddress, T::Metric)>,
    {
        let mut graph = Self::default();
        for (a, b, weight) in edges {
            let previous = graph.adj.entry(a.clone()).or_default().insert(b.clone(), weight);
            if a != b {
                graph.adj.entry(b.clone()).or_default().insert(a.clone(), weight);
            }
            if previous.is_some() {
                warn!("{}", RoutingWarning::<T>::DuplicateEdge { from: a.clone(), to: b.clone(), weight });
            }
            graph.check_link(&a, &b, weight);
        }
        graph
    }

    /// Builds a graph from a directed adjacency map, `node -> {neighbour: weight}`.
    ///
    /// Nodes that only appear as neighbours are added without outgoing links.
    pub fn from_adjacency(adj: BTreeMap<T::NodeAddress, BTreeMap<T::NodeAddress, T::Metric>>) -> Self {
        let mut graph = Self { adj };
        let targets: Vec<T::NodeAddress> = graph
            .adj
            .values()
            .flat_map(|links| links.keys().cloned())
            .collect();
        for target in targets {
            graph.add_node(target);
        }
        for (from, links) in &graph.adj {
            for (to, weight) in links {
                graph.check_link(from, to, *weight);
            }
        }
        graph
    }

    /// Adds a node without any links, does nothing if the node already exists
    pub fn add_node(&mut self, node: T::NodeAddress) {
        self.adj.entry(node).or_default();
    }

    fn check_link(&self, from: &T::NodeAddress, to: &T::NodeAddress, weight: T::Metric) {
        if from == to {
            warn!("{}", RoutingWarning::<T>::SelfLink { node: from.clone() });
        } else if weight.is_negative() {
            warn!("{}", RoutingWarning::<T>::NegativeWeight { from: from.clone(), to: to.clone(), weight });
        }
    }

    /// iterates nodes in address order
    pub fn nodes(&self) -> impl Iterator<Item = &T::NodeAddress> {
        self.adj.keys()
    }

    pub fn contains(&self, node: &T::NodeAddress) -> bool {
        self.adj.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Direct neighbours of `node`. Links from a node to itself are not neighbours.
    pub fn neighbours(&self, node: &T::NodeAddress) -> Result<Vec<Neighbour<T>>, T> {
        let links = self
            .adj
            .get(node)
            .ok_or_else(|| RoutingError::UnknownNode { node: node.clone() })?;
        Ok(links
            .iter()
            .filter(|(addr, _)| *addr != node)
            .map(|(addr, cost)| Neighbour {
                addr: addr.clone(),
                link_cost: *cost,
            })
            .collect())
    }

    /// Weight of the direct link from `a` to `b`
    pub fn weight(&self, a: &T::NodeAddress, b: &T::NodeAddress) -> Result<T::Metric, T> {
        self.adj
            .get(a)
            .and_then(|links| links.get(b))
            .copied()
            .ok_or_else(|| RoutingError::UnknownEdge {
                from: a.clone(),
                to: b.clone(),
            })
    }

    /// Checks that every link has a reverse link with the same weight
    pub fn validate(&self) -> Result<(), T> {
        for (from, links) in &self.adj {
            for (to, forward) in links {
                let reverse = self.weight(to, from).ok();
                if reverse != Some(*forward) {
                    return Err(RoutingError::AsymmetricWeight {
                        from: from.clone(),
                        to: to.clone(),
                        forward: *forward,
                        reverse,
                    });
                }
            }
        }
        Ok(())
    }
}
