use crate::framework::RoutingSystem;
use educe::Educe;

#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()))]
pub struct Neighbour<T: RoutingSystem + ?Sized> {
    /// the routing network address
    pub addr: T::NodeAddress,
    /// Direct link-cost to this neighbour. Lower is better.
    pub link_cost: T::Metric,
}
