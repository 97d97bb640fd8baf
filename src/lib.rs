//! Minimum cost maximum flow on a residual network.
//!
//! Build a [`graph::ResidualGraph`] with `add_directed_edge`, then run
//! [`minimum_cost_flow::successive_shortest_path::SuccessiveShortestPath`] on it:
//!
//! ```
//! use min_cost_max_flow::graph::ResidualGraph;
//! use min_cost_max_flow::minimum_cost_flow::successive_shortest_path::SuccessiveShortestPath;
//!
//! let mut graph = ResidualGraph::new(2);
//! graph.add_directed_edge(0, 1, 3, 2);
//! graph.add_directed_edge(0, 1, 5, 5);
//!
//! let (flow, cost) = SuccessiveShortestPath::default().solve(&mut graph, 0, 1).unwrap();
//! assert_eq!((flow, cost), (8, 31));
//! ```
pub mod error;
pub mod graph;
pub mod maximum_flow;
pub mod minimum_cost_flow;

pub use error::Error;
