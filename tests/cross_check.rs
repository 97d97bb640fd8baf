mod common;

use common::{assert_valid_flow, random_network, Network};
use min_cost_max_flow::maximum_flow::edmonds_karp::EdmondsKarp;
use min_cost_max_flow::minimum_cost_flow::cycle_canceling::CycleCanceling;
use min_cost_max_flow::minimum_cost_flow::successive_shortest_path::SuccessiveShortestPath;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rstest::rstest;

// maximum flow value and its cheapest cost over every integer flow of the network
fn enumerate(network: &Network, source: usize, sink: usize) -> (i64, i64) {
    let mut best = (0, 0);
    let mut flows = vec![0; network.edges.len()];
    loop {
        let mut excess = vec![0; network.num_nodes];
        for (&(u, v, _, _), &f) in network.edges.iter().zip(&flows) {
            excess[u] -= f;
            excess[v] += f;
        }
        let conserves = (0..network.num_nodes).all(|u| u == source || u == sink || excess[u] == 0);
        if conserves && excess[sink] >= 0 {
            let cost = network.edges.iter().zip(&flows).map(|(&(_, _, _, c), &f)| c * f).sum::<i64>();
            let value = excess[sink];
            if value > best.0 || (value == best.0 && cost < best.1) {
                best = (value, cost);
            }
        }

        // next assignment, odometer style
        let mut i = 0;
        while i < flows.len() && flows[i] == network.edges[i].2 {
            flows[i] = 0;
            i += 1;
        }
        if i == flows.len() {
            return best;
        }
        flows[i] += 1;
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn matches_exhaustive_search(#[case] seed: u64) {
    let mut rand = Pcg64::seed_from_u64(seed);
    for _ in 0..200 {
        let network = random_network(&mut rand, 2..=4, 0..=6, 0..=3, 0..=6, false);
        let sink = network.num_nodes - 1;

        let mut graph = network.build();
        let (flow, cost) = SuccessiveShortestPath::default().solve(&mut graph, 0, sink).unwrap();

        assert_eq!((flow, cost), enumerate(&network, 0, sink), "{network:?}");
        assert_valid_flow(&graph, 0, sink, flow);
    }
}

#[rstest]
#[case::non_negative_costs(5, false, 0..=30)]
#[case::negative_costs_on_dag(6, true, -15..=15)]
fn matches_reference_solvers(#[case] seed: u64, #[case] acyclic: bool, #[case] cost: std::ops::RangeInclusive<i64>) {
    let mut rand = Pcg64::seed_from_u64(seed);
    for _ in 0..200 {
        let network = random_network(&mut rand, 2..=12, 0..=40, 0..=20, cost.clone(), acyclic);
        let sink = network.num_nodes - 1;

        let mut graph = network.build();
        let (flow, cost) = SuccessiveShortestPath::default().solve(&mut graph, 0, sink).unwrap();
        assert_valid_flow(&graph, 0, sink, flow);

        let mut max_flow_graph = network.build();
        assert_eq!(EdmondsKarp::default().solve(0, sink, &mut max_flow_graph), flow, "{network:?}");
        assert_valid_flow(&max_flow_graph, 0, sink, flow);

        let mut reference = network.build();
        assert_eq!(CycleCanceling::default().solve(&mut reference, 0, sink), (flow, cost), "{network:?}");
        assert_valid_flow(&reference, 0, sink, flow);
    }
}
