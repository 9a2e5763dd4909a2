use std::cmp::{max, min};
use std::collections::BTreeSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::common::virtual_network::VirtualSystem;

pub const SAMPLE_NODES: [u32; 8] = [2, 3, 5, 18, 23, 45, 49, 60];

pub const SAMPLE_LINKS: [(u32, u32, u32); 12] = [
    (2, 3, 2),
    (2, 5, 5),
    (2, 18, 1),
    (3, 5, 3),
    (3, 18, 2),
    (5, 18, 9),
    (5, 23, 1),
    (5, 45, 5),
    (18, 23, 9),
    (23, 45, 2),
    (45, 49, 7),
    (49, 60, 6),
];

pub fn vnet_sample() -> VirtualSystem {
    VirtualSystem::create(&SAMPLE_NODES, &SAMPLE_LINKS)
}

pub fn vnet_simple_weighted() -> VirtualSystem {
    VirtualSystem::create(
        &[1, 2, 3, 4, 5],
        &[
            (1, 2, 2),
            (1, 3, 1),
            (2, 3, 4),
            (2, 4, 5),
            (3, 4, 100),
            (3, 5, 8),
            (4, 5, 1),
        ],
    )
}

/// 1 reaches 4 directly at cost 3, and through the three hop path 1-2-3-4 at the same cost
pub fn vnet_late_tie() -> VirtualSystem {
    VirtualSystem::create(
        &[1, 2, 3, 4],
        &[
            (1, 4, 3),
            (1, 2, 1),
            (2, 3, 1),
            (3, 4, 1),
        ],
    )
}

/// two equal cost paths from 1 to 4, through 2 and through 3
pub fn vnet_square() -> VirtualSystem {
    VirtualSystem::create(
        &[1, 2, 3, 4],
        &[
            (1, 2, 1),
            (1, 3, 1),
            (2, 4, 1),
            (3, 4, 1),
        ],
    )
}

/// a line of `n` nodes, the worst case for the number of rounds
pub fn line(n: u32) -> (Vec<u32>, Vec<(u32, u32, u32)>) {
    let nodes: Vec<u32> = (1..=n).collect();
    let links = (1..n).map(|a| (a, a + 1, 1)).collect();
    (nodes, links)
}

/// Random graph with `n` nodes and up to `edges` distinct links, weights in 0..max_weight.
/// The graph is not necessarily connected.
pub fn random_graph(seed: u64, n: u32, edges: usize, max_weight: u32) -> (Vec<u32>, Vec<(u32, u32, u32)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let nodes: Vec<u32> = (1..=n).collect();
    let mut pairs = BTreeSet::new();
    let mut links = Vec::new();
    let possible = (n * (n - 1) / 2) as usize;

    while links.len() < min(edges, possible) {
        let a = rng.gen_range(1..=n);
        let b = rng.gen_range(1..=n);
        if a == b {
            continue;
        }
        let (a, b) = (min(a, b), max(a, b));
        if pairs.insert((a, b)) {
            links.push((a, b, rng.gen_range(0..max_weight)));
        }
    }
    (nodes, links)
}
