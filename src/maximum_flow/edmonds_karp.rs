use crate::graph::ResidualGraph;
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::ops::Neg;

/// Maximum flow by breadth first augmenting paths. Edge costs are ignored.
#[derive(Default)]
pub struct EdmondsKarp {
    prev: Vec<Option<(usize, usize)>>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl EdmondsKarp {
    /// Returns the flow added from `source` to `sink` on top of the flow already on `graph`.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `sink` is not a node of `graph`.
    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut ResidualGraph<Flow>) -> Flow
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        assert!(source < graph.num_nodes() && sink < graph.num_nodes(), "source {source} or sink {sink} out of range for {} nodes", graph.num_nodes());
        let mut flow = Flow::zero();
        if source == sink {
            return flow;
        }

        loop {
            self.prev.clear();
            self.prev.resize(graph.num_nodes(), None);
            self.visited.clear();
            self.visited.resize(graph.num_nodes(), false);

            // bfs
            self.que.clear();
            self.que.push_back(source);
            self.visited[source] = true;
            while let Some(u) = self.que.pop_front() {
                if u == sink {
                    break;
                }

                for (position, edge) in graph.neighbors(u).enumerate() {
                    if self.visited[edge.to] || edge.residual_capacity() <= Flow::zero() {
                        continue;
                    }

                    self.visited[edge.to] = true;
                    self.prev[edge.to] = Some((u, position));
                    self.que.push_back(edge.to);
                }
            }

            if !self.visited[sink] {
                break;
            }

            // calculate delta
            let mut delta: Option<Flow> = None;
            let mut v = sink;
            while let Some((u, position)) = self.prev[v] {
                let residual = graph.adjacency[u][position].residual_capacity();
                delta = Some(delta.map_or(residual, |d| d.min(residual)));
                v = u;
            }
            let Some(delta) = delta else { break };

            // update flow
            let mut v = sink;
            while let Some((u, position)) = self.prev[v] {
                graph.push_flow(u, position, delta);
                v = u;
            }
            flow += delta;
        }

        log::trace!("edmonds-karp pushed flow from {source} to {sink}");
        flow
    }
}
