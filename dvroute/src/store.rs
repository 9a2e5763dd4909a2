use std::collections::btree_map::Iter;
use std::collections::BTreeMap;
use educe::Educe;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_with::serde_as;
use crate::concepts::route::Route;
use crate::concepts::table::RouteTable;
use crate::feedback::{Result, RoutingError};
use crate::graph::Graph;
use crate::framework::RoutingSystem;

/// Owns one routing table per node in the graph.
#[cfg_attr(feature = "serde", serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct RouteStore<T: RoutingSystem + ?Sized> {
    #[cfg_attr(feature = "serde", serde(with = "serde_with::As::<Vec<(serde_with::Same, serde_with::Same)>>"))]
    tables: BTreeMap<T::NodeAddress, RouteTable<T>>,
}

impl<T: RoutingSystem + ?Sized> RouteStore<T> {
    /// Seeds every node with its self route and a route to each direct neighbour
    pub fn initialize(graph: &Graph<T>) -> Result<Self, T> {
        let mut tables = BTreeMap::new();
        for node in graph.nodes() {
            let mut table = RouteTable::new(node.clone());
            for neigh in graph.neighbours(node)? {
                table.insert(neigh.addr.clone(), Route::new(neigh.link_cost, neigh.addr));
            }
            tables.insert(node.clone(), table);
        }
        Ok(Self { tables })
    }

    pub fn get(&self, node: &T::NodeAddress) -> Result<&RouteTable<T>, T> {
        self.tables
            .get(node)
            .ok_or_else(|| RoutingError::UnknownNode { node: node.clone() })
    }

    pub fn get_mut(&mut self, node: &T::NodeAddress) -> Result<&mut RouteTable<T>, T> {
        self.tables
            .get_mut(node)
            .ok_or_else(|| RoutingError::UnknownNode { node: node.clone() })
    }

    /// Overwrites a single entry of `node`'s table
    pub fn set(&mut self, node: &T::NodeAddress, dest: T::NodeAddress, route: Route<T>) -> Result<(), T> {
        self.get_mut(node)?.insert(dest, route);
        Ok(())
    }

    /// Deep copy of every table, used as the read-only input of a round
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            tables: self.tables.clone(),
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T::NodeAddress> {
        self.tables.keys()
    }

    pub fn iter(&self) -> Iter<'_, T::NodeAddress, RouteTable<T>> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Immutable view of all tables as they were at the start of a round.
#[derive(Educe)]
#[educe(Debug(bound()))]
pub struct Snapshot<T: RoutingSystem + ?Sized> {
    tables: BTreeMap<T::NodeAddress, RouteTable<T>>,
}

impl<T: RoutingSystem + ?Sized> Snapshot<T> {
    pub fn get(&self, node: &T::NodeAddress) -> Result<&RouteTable<T>, T> {
        self.tables
            .get(node)
            .ok_or_else(|| RoutingError::UnknownNode { node: node.clone() })
    }

    pub fn iter(&self) -> Iter<'_, T::NodeAddress, RouteTable<T>> {
        self.tables.iter()
    }
}
