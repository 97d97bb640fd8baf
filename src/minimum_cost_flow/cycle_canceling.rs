use crate::graph::ResidualGraph;
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use num_traits::NumAssign;
use std::ops::Neg;

/// Minimum cost maximum flow by canceling negative cycles.
///
/// A maximum flow is found first, ignoring costs. Negative cost cycles in its residual network are
/// then saturated one at a time until none is left. Much slower than successive shortest paths but
/// shares no search code with it.
#[derive(Default)]
pub struct CycleCanceling {
    max_flow: EdmondsKarp,
    prev: Vec<(usize, usize)>,
}

impl CycleCanceling {
    /// Returns the flow added from `source` to `sink` and the cost of all flow on `graph`.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `sink` is not a node of `graph`.
    pub fn solve<Flow>(&mut self, graph: &mut ResidualGraph<Flow>, source: usize, sink: usize) -> (Flow, Flow)
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        let flow = self.max_flow.solve(source, sink, graph);

        let mut canceled = 0;
        while let Some(start) = self.find_negative_cycle(graph) {
            let mut cycle = Vec::new();
            let mut v = start;
            loop {
                let (u, position) = self.prev[v];
                cycle.push((u, position));
                v = u;
                if v == start {
                    break;
                }
            }

            let delta = cycle.iter().map(|&(u, position)| graph.adjacency[u][position].residual_capacity()).min().unwrap_or_else(Flow::zero);
            assert!(delta > Flow::zero());

            for (u, position) in cycle {
                graph.push_flow(u, position, delta);
            }
            canceled += 1;
        }

        log::debug!("canceled {canceled} negative cycles");
        (flow, graph.minimum_cost())
    }

    // bellman-ford from a virtual root connected to every node
    fn find_negative_cycle<Flow>(&mut self, graph: &ResidualGraph<Flow>) -> Option<usize>
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        let num_nodes = graph.num_nodes();
        self.prev.clear();
        self.prev.resize(num_nodes, (usize::MAX, usize::MAX));
        let mut dist = vec![Flow::zero(); num_nodes];

        let mut last_updated = None;
        for _ in 0..num_nodes {
            last_updated = None;
            for u in 0..num_nodes {
                for (position, edge) in graph.neighbors(u).enumerate() {
                    if edge.residual_capacity() > Flow::zero() && dist[u] + edge.cost < dist[edge.to] {
                        dist[edge.to] = dist[u] + edge.cost;
                        self.prev[edge.to] = (u, position);
                        last_updated = Some(edge.to);
                    }
                }
            }
            last_updated?;
        }

        // after num_nodes steps back the walk is inside the cycle
        let mut v = last_updated?;
        for _ in 0..num_nodes {
            v = self.prev[v].0;
        }
        Some(v)
    }
}
