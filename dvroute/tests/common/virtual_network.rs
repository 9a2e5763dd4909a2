use std::collections::BTreeMap;
use dvroute::framework::{ProtocolParams, RoutingSystem};
use dvroute::graph::Graph;
use dvroute::sim::Simulation;
use dvroute::store::RouteStore;

pub struct VirtualSystem {
    pub sim: Simulation<VirtualSystem>,
}

impl VirtualSystem {
    pub fn create(nodes: &[u32], links: &[(u32, u32, u32)]) -> VirtualSystem {
        Self::create_with(nodes, links, VirtualSystem::config())
    }

    pub fn create_with(nodes: &[u32], links: &[(u32, u32, u32)], params: ProtocolParams) -> VirtualSystem {
        let mut graph = Graph::from_edges(links.iter().copied());
        for node in nodes {
            graph.add_node(*node);
        }
        VirtualSystem {
            sim: Simulation::with_params(graph, params).unwrap(),
        }
    }

    pub fn get_next_hop(&self, cur: u32, dest: u32) -> u32 {
        let table = self.sim.table(&cur).unwrap_or_else(|_| panic!("No node {cur} found"));
        *table.next_hop_to(&dest).unwrap_or_else(|| panic!("No route found to {dest}"))
    }

    pub fn get_metric_to(&self, cur: u32, dest: u32) -> u32 {
        let table = self.sim.table(&cur).unwrap_or_else(|_| panic!("No node {cur} found"));
        table.metric_to(&dest).unwrap_or_else(|| panic!("No route found to {dest}"))
    }

    pub fn has_route(&self, cur: u32, dest: u32) -> bool {
        self.sim.table(&cur).unwrap().contains(&dest)
    }

    pub fn tick(&mut self) -> bool {
        self.sim.step().unwrap()
    }

    pub fn tick_n(&mut self, times: usize) {
        for _ in 0..times {
            self.tick();
        }
    }

    /// runs to convergence and returns the number of rounds
    pub fn converge(&mut self) -> usize {
        self.sim.run().unwrap()
    }

    /// runs to convergence, keeping a copy of the tables seen at the start of every round
    pub fn converge_recorded(&mut self) -> Vec<RouteStore<VirtualSystem>> {
        let mut history = Vec::new();
        self.sim.run_with(|_, store| history.push(store.clone())).unwrap();
        history.push(self.sim.store().clone());
        history
    }

    /// (metric, next hop) for every destination known by `cur`
    pub fn routes_of(&self, cur: u32) -> BTreeMap<u32, (u32, u32)> {
        self.sim
            .table(&cur)
            .unwrap()
            .iter()
            .map(|(dest, route)| (*dest, (route.metric, route.next_hop)))
            .collect()
    }

    pub fn freeze(&self) -> String {
        self.sim.freeze().unwrap()
    }

    pub fn restore(&self, state: String) -> VirtualSystem {
        VirtualSystem {
            sim: Simulation::restore(self.sim.graph().clone(), self.sim.params().clone(), &state).unwrap(),
        }
    }
}

impl RoutingSystem for VirtualSystem {
    type NodeAddress = u32;
    type Metric = u32;
}

/// Same topology model, but weights may be negative
pub struct SignedSystem;

impl RoutingSystem for SignedSystem {
    type NodeAddress = u32;
    type Metric = i64;
}

/// Small metric type, long paths run into its upper bound
pub struct NarrowSystem;

impl RoutingSystem for NarrowSystem {
    type NodeAddress = u32;
    type Metric = u16;
}

pub struct FloatSystem;

impl RoutingSystem for FloatSystem {
    type NodeAddress = String;
    type Metric = f64;
}

/// All-pairs shortest paths with Floyd-Warshall, independent of the crate's own algorithms
pub fn all_pairs(nodes: &[u32], links: &[(u32, u32, u32)]) -> BTreeMap<(u32, u32), u32> {
    let mut dist: BTreeMap<(u32, u32), u32> = BTreeMap::new();
    for node in nodes {
        dist.insert((*node, *node), 0);
    }
    for &(a, b, w) in links {
        for key in [(a, b), (b, a)] {
            let entry = dist.entry(key).or_insert(w);
            *entry = (*entry).min(w);
        }
    }
    for k in nodes {
        for i in nodes {
            for j in nodes {
                if let (Some(&ik), Some(&kj)) = (dist.get(&(*i, *k)), dist.get(&(*k, *j))) {
                    let through = ik + kj;
                    let entry = dist.entry((*i, *j)).or_insert(through);
                    if through < *entry {
                        *entry = through;
                    }
                }
            }
        }
    }
    dist
}
