#![allow(dead_code)]

use min_cost_max_flow::graph::ResidualGraph;
use rand::Rng;
use rand_pcg::Pcg64;
use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct Network {
    pub num_nodes: usize,
    pub edges: Vec<(usize, usize, i64, i64)>,
}

impl Network {
    pub fn build(&self) -> ResidualGraph<i64> {
        let mut graph = ResidualGraph::new(self.num_nodes);
        for &(u, v, upper, cost) in &self.edges {
            graph.add_directed_edge(u, v, upper, cost);
        }
        graph
    }
}

// edges go from lower to higher node when `acyclic` is set, so negative costs cannot form cycles
pub fn random_network(rand: &mut Pcg64, num_nodes: RangeInclusive<usize>, num_edges: RangeInclusive<usize>, upper: RangeInclusive<i64>, cost: RangeInclusive<i64>, acyclic: bool) -> Network {
    let num_nodes = rand.gen_range(num_nodes);
    let num_edges = rand.gen_range(num_edges);
    let mut edges = Vec::with_capacity(num_edges);
    while edges.len() < num_edges {
        let u = rand.gen_range(0..num_nodes);
        let v = rand.gen_range(0..num_nodes);
        if u == v || (acyclic && u > v) {
            continue;
        }
        edges.push((u, v, rand.gen_range(upper.clone()), rand.gen_range(cost.clone())));
    }
    Network { num_nodes, edges }
}

pub fn assert_valid_flow(graph: &ResidualGraph<i64>, source: usize, sink: usize, flow: i64) {
    assert!(graph.is_feasible());
    for (_, e) in graph.edges() {
        assert!(0 <= e.flow && e.flow <= e.upper, "{e:?}");
    }
    for u in 0..graph.num_nodes() {
        let expected = if u == source {
            -flow
        } else if u == sink {
            flow
        } else {
            0
        };
        assert_eq!(graph.excess(u), expected, "excess of node {u}");
    }
}
