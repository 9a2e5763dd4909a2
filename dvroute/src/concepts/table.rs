use std::collections::btree_map::Iter;
use std::collections::BTreeMap;
use crate::concepts::route::Route;
use crate::framework::{Metric, RoutingSystem};
use educe::Educe;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_with::serde_as;

/// The routing table of a single node, keyed by destination.
///
/// A table always holds the self route `(0, self)` for its owner.
#[cfg_attr(feature = "serde", serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct RouteTable<T: RoutingSystem + ?Sized> {
    pub address: T::NodeAddress,
    /// Destination, Route
    #[cfg_attr(feature = "serde", serde(with = "serde_with::As::<Vec<(serde_with::Same, serde_with::Same)>>"))]
    routes: BTreeMap<T::NodeAddress, Route<T>>,
}

impl<T: RoutingSystem + ?Sized> RouteTable<T> {
    /// creates a table that only knows the route to itself
    pub fn new(address: T::NodeAddress) -> Self {
        let mut routes = BTreeMap::new();
        routes.insert(address.clone(), Route::new(T::Metric::ZERO, address.clone()));
        Self { address, routes }
    }

    pub fn get(&self, dest: &T::NodeAddress) -> Option<&Route<T>> {
        self.routes.get(dest)
    }

    pub fn metric_to(&self, dest: &T::NodeAddress) -> Option<T::Metric> {
        self.routes.get(dest).map(|route| route.metric)
    }

    pub fn next_hop_to(&self, dest: &T::NodeAddress) -> Option<&T::NodeAddress> {
        self.routes.get(dest).map(|route| &route.next_hop)
    }

    /// overwrites the route to `dest`, the self route is never replaced
    pub fn insert(&mut self, dest: T::NodeAddress, route: Route<T>) {
        if dest == self.address {
            return;
        }
        self.routes.insert(dest, route);
    }

    pub fn contains(&self, dest: &T::NodeAddress) -> bool {
        self.routes.contains_key(dest)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// iterates routes in destination order
    pub fn iter(&self) -> Iter<'_, T::NodeAddress, Route<T>> {
        self.routes.iter()
    }
}

impl<'a, T: RoutingSystem + ?Sized> IntoIterator for &'a RouteTable<T> {
    type Item = (&'a T::NodeAddress, &'a Route<T>);
    type IntoIter = Iter<'a, T::NodeAddress, Route<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
