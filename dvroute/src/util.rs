use std::collections::BTreeMap;
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use crate::feedback::{Result, RoutingError};
use crate::framework::{PathCost, RoutingSystem};
use crate::graph::Graph;

/// Computes the cost of the shortest path from `source` to every reachable node, with global
/// knowledge of the graph.
///
/// Path costs saturate the same way routes do. Results are meaningless if the graph has
/// negative weights.
///
/// # Examples
///
/// ```
/// use dvroute::framework::RoutingSystem;
/// use dvroute::graph::Graph;
/// use dvroute::util::shortest_paths;
///
/// struct Line;
/// impl RoutingSystem for Line {
///     type NodeAddress = u8;
///     type Metric = u32;
/// }
///
/// let graph = Graph::<Line>::from_edges([(1, 2, 3), (2, 3, 4), (1, 3, 10)]);
/// let dist = shortest_paths(&graph, &1).unwrap();
/// assert_eq!(dist[&3], 7);
/// ```
pub fn shortest_paths<T: RoutingSystem + ?Sized>(
    graph: &Graph<T>,
    source: &T::NodeAddress,
) -> Result<BTreeMap<T::NodeAddress, T::Metric>, T> {
    let mut topology = DiGraph::<T::NodeAddress, PathCost<T::Metric>>::new();
    let mut index: BTreeMap<T::NodeAddress, NodeIndex> = BTreeMap::new();
    for node in graph.nodes() {
        index.insert(node.clone(), topology.add_node(node.clone()));
    }
    for (node, idx) in &index {
        for neigh in graph.neighbours(node)? {
            if let Some(to) = index.get(&neigh.addr) {
                topology.add_edge(*idx, *to, PathCost(neigh.link_cost));
            }
        }
    }

    let start = *index
        .get(source)
        .ok_or_else(|| RoutingError::UnknownNode { node: source.clone() })?;
    Ok(dijkstra(&topology, start, None, |edge| *edge.weight())
        .into_iter()
        .map(|(idx, cost)| (topology[idx].clone(), cost.0))
        .collect())
}
