use crate::framework::RoutingSystem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use educe::Educe;

/// A single routing table entry
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Route<T: RoutingSystem + ?Sized> {
    /// total cost to the destination. Lower is better
    pub metric: T::Metric,
    /// the neighbour packets for this destination are forwarded to, or the node itself for its self route
    pub next_hop: T::NodeAddress,
}

impl<T: RoutingSystem + ?Sized> Route<T> {
    pub fn new(metric: T::Metric, next_hop: T::NodeAddress) -> Self {
        Self { metric, next_hop }
    }
}

impl<T: RoutingSystem + ?Sized> Display for Route<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.metric, self.next_hop)
    }
}
