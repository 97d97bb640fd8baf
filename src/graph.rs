use num_traits::NumAssign;
use std::ops::Neg;

/// Position of an edge inside the adjacency list of `node`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct EdgeId {
    pub node: usize,
    pub position: usize,
}

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub cost: Flow,
    // position of the paired edge in the adjacency list of `to`
    pub rev: usize,
    // false for the zero capacity edge created alongside every inserted edge
    pub forward: bool,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }

    pub fn is_feasible(&self) -> bool {
        if self.forward {
            Flow::zero() <= self.flow && self.flow <= self.upper
        } else {
            self.flow <= Flow::zero() && self.upper == Flow::zero()
        }
    }
}

/// Residual network stored as one edge list per node.
///
/// Every call to [`ResidualGraph::add_directed_edge`] appends a forward edge to the list of its
/// tail and a paired reverse edge (capacity zero, negated cost) to the list of its head. The two
/// edges refer to each other by position, so the pairing survives any reallocation of the lists.
#[derive(Default, Debug, Clone)]
pub struct ResidualGraph<Flow> {
    num_edges: usize,
    pub(crate) adjacency: Vec<Vec<Edge<Flow>>>,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_edges: 0, adjacency: (0..num_nodes).map(|_| Vec::new()).collect() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of inserted edges, reverse edges not counted.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        let first = self.adjacency.len();
        self.adjacency.resize_with(first + num_nodes, Vec::new);
        (first..self.adjacency.len()).collect()
    }

    /// Adds the edge `from -> to` together with its reverse edge and returns the id of the former.
    ///
    /// Parallel edges are kept as independent edges.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not a node of the graph.
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow, cost: Flow) -> EdgeId {
        assert!(from < self.num_nodes() && to < self.num_nodes(), "edge {from} -> {to} out of range for {} nodes", self.num_nodes());

        let position = self.adjacency[from].len();
        // a self loop stores both edges in the same list
        let rev_position = self.adjacency[to].len() + usize::from(from == to);

        self.adjacency[from].push(Edge { to, flow: Flow::zero(), upper, cost, rev: rev_position, forward: true });
        self.adjacency[to].push(Edge { to: from, flow: Flow::zero(), upper: Flow::zero(), cost: -cost, rev: position, forward: false });

        self.num_edges += 1;
        EdgeId { node: from, position }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<Edge<Flow>> {
        self.adjacency[u].iter()
    }

    pub fn get_edge(&self, edge_id: EdgeId) -> Option<&Edge<Flow>> {
        self.adjacency.get(edge_id.node)?.get(edge_id.position)
    }

    /// Iterates over the inserted edges as `(from, edge)`, skipping reverse edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, &Edge<Flow>)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| list.iter().filter(|e| e.forward).map(move |e| (u, e)))
    }

    /// Pushes `flow` along the edge at `position` of `u` and returns the edge cost.
    #[inline]
    pub(crate) fn push_flow(&mut self, u: usize, position: usize, flow: Flow) -> Flow {
        let edge = &mut self.adjacency[u][position];
        edge.flow += flow;
        let (to, rev, cost) = (edge.to, edge.rev, edge.cost);
        self.adjacency[to][rev].flow -= flow;
        cost
    }

    /// Inflow minus outflow of `u`.
    pub fn excess(&self, u: usize) -> Flow {
        // the flow of a reverse edge is the negated flow of its forward edge
        self.adjacency[u].iter().fold(Flow::zero(), |excess, e| excess - e.flow)
    }

    pub fn minimum_cost(&self) -> Flow {
        self.edges().fold(Flow::zero(), |cost, (_, e)| cost + e.cost * e.flow)
    }

    pub fn is_feasible(&self) -> bool {
        self.adjacency.iter().flatten().all(|e| e.is_feasible() && self.adjacency[e.to][e.rev].flow == -e.flow)
    }

    pub fn reset_flow(&mut self) {
        self.adjacency.iter_mut().flatten().for_each(|e| e.flow = Flow::zero());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_edges_point_at_each_other() {
        let mut graph = ResidualGraph::new(3);
        let a = graph.add_directed_edge(0, 1, 4, 3);
        let b = graph.add_directed_edge(1, 2, 2, -1);
        let c = graph.add_directed_edge(0, 1, 1, 7);

        assert_eq!(graph.num_edges(), 3);
        for id in [a, b, c] {
            let e = graph.get_edge(id).unwrap();
            let r = &graph.adjacency[e.to][e.rev];
            assert!(e.forward);
            assert!(!r.forward);
            assert_eq!(r.to, id.node);
            assert_eq!(r.rev, id.position);
            assert_eq!(r.upper, 0);
            assert_eq!(r.cost, -e.cost);
        }
        assert_eq!(c, EdgeId { node: 0, position: 1 });
    }

    #[test]
    fn self_loop_pairs_within_one_list() {
        let mut graph = ResidualGraph::new(1);
        let id = graph.add_directed_edge(0, 0, 5, 2);
        let e = graph.get_edge(id).unwrap();
        assert_eq!(e.rev, 1);
        assert_eq!(graph.adjacency[0][1].rev, 0);
    }

    #[test]
    fn push_flow_updates_both_sides() {
        let mut graph = ResidualGraph::new(3);
        graph.add_directed_edge(0, 1, 4, 3);
        graph.add_directed_edge(1, 2, 2, 5);

        assert_eq!(graph.push_flow(0, 0, 2), 3);
        assert_eq!(graph.push_flow(1, 1, 2), 5);

        assert_eq!(graph.adjacency[1][0].residual_capacity(), 2);
        assert_eq!(graph.excess(0), -2);
        assert_eq!(graph.excess(1), 0);
        assert_eq!(graph.excess(2), 2);
        assert_eq!(graph.minimum_cost(), 16);
        assert!(graph.is_feasible());

        graph.reset_flow();
        assert_eq!(graph.minimum_cost(), 0);
        assert_eq!(graph.excess(2), 0);
    }

    #[test]
    fn edges_skip_reverse_edges() {
        let mut graph: ResidualGraph<i64> = ResidualGraph::default();
        let nodes = graph.add_nodes(3);
        assert_eq!(nodes, vec![0, 1, 2]);
        assert_eq!(graph.add_node(), 3);
        graph.add_directed_edge(2, 0, 1, 1);
        graph.add_directed_edge(0, 3, 1, 1);

        let tails: Vec<_> = graph.edges().map(|(u, e)| (u, e.to)).collect();
        assert_eq!(tails, vec![(0, 3), (2, 0)]);
    }

    #[test]
    #[should_panic]
    fn rejects_unknown_node() {
        let mut graph = ResidualGraph::new(2);
        graph.add_directed_edge(0, 2, 1, 1);
    }
}
