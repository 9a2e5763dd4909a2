use dvroute::store::RouteStore;
use crate::common::graphs::{line, random_graph, SAMPLE_LINKS, SAMPLE_NODES};
use crate::common::virtual_network::{all_pairs, VirtualSystem};

mod common;

fn assert_monotonic(history: &[RouteStore<VirtualSystem>]) {
    for pair in history.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        for (node, table) in before.iter() {
            let next = after.get(node).unwrap();
            for (dest, route) in table {
                let metric = next
                    .metric_to(dest)
                    .unwrap_or_else(|| panic!("{node} forgot its route to {dest}"));
                assert!(metric <= route.metric, "cost from {node} to {dest} went up");
            }
        }
    }
}

fn assert_shortest_paths(network: &VirtualSystem, nodes: &[u32], links: &[(u32, u32, u32)]) {
    let dist = all_pairs(nodes, links);
    for a in nodes {
        for b in nodes {
            match dist.get(&(*a, *b)) {
                Some(cost) => assert_eq!(network.get_metric_to(*a, *b), *cost, "route {a} -> {b}"),
                None => assert!(!network.has_route(*a, *b), "{a} should not reach {b}"),
            }
        }
    }
}

/// the next hop of every route must be a direct neighbour, whose own route closes the cost
fn assert_consistent_next_hops(network: &VirtualSystem, nodes: &[u32]) {
    let graph = network.sim.graph();
    for a in nodes {
        for (dest, (metric, next_hop)) in network.routes_of(*a) {
            if dest == *a {
                assert_eq!((metric, next_hop), (0, *a));
                continue;
            }
            let link = graph.weight(a, &next_hop).unwrap();
            assert_eq!(link + network.get_metric_to(next_hop, dest), metric);
        }
    }
}

#[test]
fn sample_graph_properties() {
    let mut network = common::graphs::vnet_sample();
    let history = network.converge_recorded();

    assert_monotonic(&history);
    assert_shortest_paths(&network, &SAMPLE_NODES, &SAMPLE_LINKS);
    assert_consistent_next_hops(&network, &SAMPLE_NODES);
    assert_eq!(network.sim.round(), 5);
    assert!(network.sim.round() <= SAMPLE_NODES.len() - 1);
}

#[test]
fn converged_tables_are_stable() {
    let mut network = common::graphs::vnet_sample();
    network.converge();
    let converged = network.sim.store().clone();

    for _ in 0..5 {
        assert!(!network.tick());
    }
    assert_eq!(network.sim.store(), &converged);
    assert!(network.sim.is_converged());
}

#[test]
fn line_needs_one_round_per_hop_beyond_neighbours() {
    for n in 2..10 {
        let (nodes, links) = line(n);
        let mut network = VirtualSystem::create(&nodes, &links);
        assert_eq!(network.converge(), (n - 2) as usize);
        assert_eq!(network.get_metric_to(1, n), n - 1);
        assert_eq!(network.get_next_hop(n, 1), n - 1);
    }
}

#[test]
fn random_graphs() {
    for seed in 0..40u64 {
        let n = 2 + (seed % 14) as u32;
        let (nodes, links) = random_graph(seed, n, (n * 2) as usize, 20);
        let mut network = VirtualSystem::create(&nodes, &links);

        let history = network.converge_recorded();
        let rounds = network.sim.round();

        // every changing round plus the quiet one is observed, then the final tables
        assert_eq!(history.len(), rounds + 2);

        assert!(rounds <= nodes.len() - 1, "seed {seed} took {rounds} rounds");
        assert_monotonic(&history);
        assert_shortest_paths(&network, &nodes, &links);
        assert_consistent_next_hops(&network, &nodes);
        assert!(network.sim.verify().is_ok());
    }
}

#[test]
fn random_graphs_with_zero_weights() {
    for seed in 100..120u64 {
        let (nodes, links) = random_graph(seed, 9, 14, 2);
        let mut network = VirtualSystem::create(&nodes, &links);
        let rounds = network.converge();

        assert!(rounds <= nodes.len() - 1);
        assert_shortest_paths(&network, &nodes, &links);
    }
}
