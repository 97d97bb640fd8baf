use crate::error::Error;
use crate::graph::ResidualGraph;
use crate::minimum_cost_flow::config::Config;
use crate::minimum_cost_flow::trace::{AugmentingRound, Observer};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::iter;
use std::ops::Neg;

/// Minimum cost maximum flow by successive shortest paths.
///
/// Every round searches the cheapest augmenting path with a FIFO queue label-correcting search,
/// so reverse edges with negative cost are fine, and pushes the bottleneck along it. The flow
/// after each round is a minimum cost flow of its value; the last one is also maximum.
pub struct SuccessiveShortestPath<Flow> {
    config: Config,
    total_flow: Flow,
    total_cost: Flow,
    rounds: usize,

    dist: Vec<Option<Flow>>,
    prev: Vec<Option<(usize, usize)>>,
    in_queue: Vec<bool>,
    que: VecDeque<usize>,
    path: Vec<usize>,
}

impl<Flow> Default for SuccessiveShortestPath<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<Flow> SuccessiveShortestPath<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
{
    pub fn new(config: Config) -> Self {
        Self {
            config,
            total_flow: Flow::zero(),
            total_cost: Flow::zero(),
            rounds: 0,
            dist: Vec::new(),
            prev: Vec::new(),
            in_queue: Vec::new(),
            que: VecDeque::new(),
            path: Vec::new(),
        }
    }

    /// Flow pushed by the last call to `solve`, also when it stopped at the round limit.
    #[inline]
    pub fn total_flow(&self) -> Flow {
        self.total_flow
    }

    #[inline]
    pub fn total_cost(&self) -> Flow {
        self.total_cost
    }

    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn solve(&mut self, graph: &mut ResidualGraph<Flow>, source: usize, sink: usize) -> Result<(Flow, Flow), Error> {
        self.solve_with_observer(graph, source, sink, &mut ())
    }

    /// Augments from `source` to `sink` until the sink is unreachable and returns the flow and cost
    /// added by this call.
    ///
    /// The flow already present on `graph` is kept, so solving a solved graph again returns zeros.
    /// Rounds below `Config::trace_limit` are reported to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoundLimitReached`] when `Config::max_rounds` rounds were done and an
    /// augmenting path is still left. The graph then holds a minimum cost flow of value
    /// [`Self::total_flow`].
    ///
    /// # Panics
    ///
    /// Panics if `source` or `sink` is not a node of `graph`.
    pub fn solve_with_observer<O: Observer<Flow>>(&mut self, graph: &mut ResidualGraph<Flow>, source: usize, sink: usize, observer: &mut O) -> Result<(Flow, Flow), Error> {
        assert!(source < graph.num_nodes() && sink < graph.num_nodes(), "source {source} or sink {sink} out of range for {} nodes", graph.num_nodes());

        self.total_flow = Flow::zero();
        self.total_cost = Flow::zero();
        self.rounds = 0;

        if source == sink {
            log::debug!("source and sink are both {source}, nothing to push");
            return Ok((Flow::zero(), Flow::zero()));
        }

        while self.calculate_distance(graph, source, sink) {
            if !self.config.allows(self.rounds) {
                log::warn!("round limit reached after {} rounds, flow {:?}, cost {:?}", self.rounds, self.total_flow, self.total_cost);
                return Err(Error::RoundLimitReached { rounds: self.rounds });
            }

            let (delta, unit_cost) = self.path_capacity_and_cost(graph, source, sink);
            debug_assert!(delta > Flow::zero());
            self.update_flow(graph, source, sink, delta);
            self.total_flow += delta;

            log::debug!("round {}: pushed {:?} at unit cost {:?}", self.rounds + 1, delta, unit_cost);

            if self.config.traces(self.rounds) {
                self.collect_path(source, sink);
                observer.on_augment(&AugmentingRound {
                    round: self.rounds,
                    path: &self.path,
                    bottleneck: delta,
                    unit_cost,
                    cost: delta * unit_cost,
                    total_flow: self.total_flow,
                    total_cost: self.total_cost,
                });
            }
            self.rounds += 1;
        }

        log::debug!("sink unreachable after {} rounds: flow {:?}, cost {:?}", self.rounds, self.total_flow, self.total_cost);
        Ok((self.total_flow, self.total_cost))
    }

    // label-correcting search over edges with residual capacity; true if the sink was reached
    fn calculate_distance(&mut self, graph: &ResidualGraph<Flow>, source: usize, sink: usize) -> bool {
        let num_nodes = graph.num_nodes();
        self.dist.clear();
        self.dist.resize(num_nodes, None);
        self.prev.clear();
        self.prev.resize(num_nodes, None);
        self.in_queue.clear();
        self.in_queue.resize(num_nodes, false);
        self.que.clear();

        self.dist[source] = Some(Flow::zero());
        self.que.push_back(source);
        self.in_queue[source] = true;

        while let Some(u) = self.que.pop_front() {
            self.in_queue[u] = false;
            let Some(d) = self.dist[u] else { continue };

            for (position, edge) in graph.neighbors(u).enumerate() {
                if edge.residual_capacity() <= Flow::zero() {
                    continue;
                }

                let new_dist = d + edge.cost;
                if self.dist[edge.to].map_or(true, |old| new_dist < old) {
                    self.dist[edge.to] = Some(new_dist);
                    self.prev[edge.to] = Some((u, position));
                    if !self.in_queue[edge.to] {
                        self.in_queue[edge.to] = true;
                        self.que.push_back(edge.to);
                    }
                }
            }
        }

        self.dist[sink].is_some()
    }

    // (node, position) of the path edges, from the sink back to the source
    fn path_edges(&self, source: usize, sink: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        iter::successors(self.prev[sink], move |&(u, _)| if u == source { None } else { self.prev[u] })
    }

    fn path_capacity_and_cost(&self, graph: &ResidualGraph<Flow>, source: usize, sink: usize) -> (Flow, Flow) {
        let mut delta: Option<Flow> = None;
        let mut unit_cost = Flow::zero();
        for (u, position) in self.path_edges(source, sink) {
            let edge = &graph.adjacency[u][position];
            let residual = edge.residual_capacity();
            delta = Some(delta.map_or(residual, |d| d.min(residual)));
            unit_cost += edge.cost;
        }
        (delta.unwrap_or_else(Flow::zero), unit_cost)
    }

    fn update_flow(&mut self, graph: &mut ResidualGraph<Flow>, source: usize, sink: usize, delta: Flow) {
        let mut v = sink;
        while v != source {
            let Some((u, position)) = self.prev[v] else { break };
            let cost = graph.push_flow(u, position, delta);
            self.total_cost += delta * cost;
            v = u;
        }
        debug_assert_eq!(v, source);
    }

    fn collect_path(&mut self, source: usize, sink: usize) {
        let mut path: Vec<usize> = iter::once(sink).chain(self.path_edges(source, sink).map(|(u, _)| u)).collect();
        path.reverse();
        self.path = path;
    }
}
