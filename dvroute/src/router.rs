use crate::concepts::route::Route;
use crate::concepts::table::RouteTable;
use crate::framework::{Metric, RoutingSystem};
use log::trace;

/// Applies the distance-vector relaxation rule to `table` using a neighbour's advertised table.
///
/// Every destination advertised by `sender` is offered at `advertised cost + link_cost`. The offer
/// is taken if the receiver has no route to that destination yet, or if it is strictly cheaper than
/// the current route. Equal offers never replace the current next hop.
///
/// # Arguments
///
/// * `receiver`: the node owning `table`
/// * `table`: the live table of the receiver
/// * `sender`: the neighbour that advertised `advertised`
/// * `advertised`: the sender's table as of the previous round
/// * `link_cost`: weight of the link from `receiver` to `sender`
///
/// returns: true if any route was added or improved
pub fn relax<T: RoutingSystem + ?Sized>(
    receiver: &T::NodeAddress,
    table: &mut RouteTable<T>,
    sender: &T::NodeAddress,
    advertised: &RouteTable<T>,
    link_cost: T::Metric,
) -> bool {
    let mut changed = false;
    for (dest, neigh_route) in advertised {
        if dest == receiver {
            continue; // the self route is never beaten
        }

        let metric = neigh_route.metric.sum(link_cost);
        let better = match table.get(dest) {
            Some(current) => metric < current.metric,
            None => true,
        };
        if better {
            trace!("{receiver} learned route to {dest} via {sender} with cost {metric}");
            table.insert(dest.clone(), Route::new(metric, sender.clone()));
            changed = true;
        }
    }
    changed
}
