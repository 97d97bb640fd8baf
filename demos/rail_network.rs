use clap::Parser;
use min_cost_max_flow::graph::ResidualGraph;
use min_cost_max_flow::minimum_cost_flow::config::Config;
use min_cost_max_flow::minimum_cost_flow::successive_shortest_path::SuccessiveShortestPath;
use min_cost_max_flow::minimum_cost_flow::trace::{AugmentingRound, Observer};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::error::Error;
use std::io::{self, Write};

// -1 marks a missing track
const TRACK_CAPACITY: [[i64; 7]; 7] = [
    [-1, 30, 45, 25, 30, 20, 40],
    [30, -1, 55, 25, 35, 40, 25],
    [25, 30, -1, 45, 75, 30, 40],
    [15, 10, 25, -1, 40, 30, 80],
    [10, 45, 15, 60, -1, 60, 75],
    [10, 30, 45, 30, 55, -1, 40],
    [15, 25, 45, 30, 40, 50, -1],
];

const TRACK_COST: [[i64; 7]; 7] = [
    [-1, 5, 10, 4, 5, 6, 10],
    [1, -1, 7, 10, 15, 5, 5],
    [1, 10, -1, 5, 4, 7, 12],
    [2, 6, 4, -1, 5, 10, 8],
    [1, 7, 4, 4, -1, 9, 2],
    [1, 4, 2, 3, 8, -1, 12],
    [1, 10, 5, 6, 8, 16, -1],
];

const STATION_CAPACITY: [i64; 7] = [1000, 55, 35, 40, 50, 45, 1000];

/// Routes as many trains as possible from the first station to the last one at minimum cost.
#[derive(Parser, Debug)]
struct Args {
    /// Number of rounds to narrate
    #[arg(long, default_value_t = 5)]
    trace_rounds: usize,

    /// Stop after this many augmenting rounds
    #[arg(long)]
    max_rounds: Option<usize>,

    /// Log level of the solver
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

/// Every station is split into an `in` and an `out` node so that its capacity becomes an edge.
struct RailNetwork {
    graph: ResidualGraph<i64>,
    names: Vec<String>,
}

impl RailNetwork {
    fn new() -> Self {
        let n = STATION_CAPACITY.len();
        let mut graph = ResidualGraph::new(2 * n);
        let names = (0..2 * n).map(|u| if u < n { format!("n{}-in", u + 1) } else { format!("n{}-out", u - n + 1) }).collect();

        for (station, &capacity) in STATION_CAPACITY.iter().enumerate() {
            graph.add_directed_edge(station, station + n, capacity, 0);
        }
        for i in 0..n {
            for j in 0..n {
                if i != j && TRACK_CAPACITY[i][j] >= 0 {
                    graph.add_directed_edge(i + n, j, TRACK_CAPACITY[i][j], TRACK_COST[i][j]);
                }
            }
        }

        Self { graph, names }
    }

    fn source(&self) -> usize {
        0
    }

    fn sink(&self) -> usize {
        self.graph.num_nodes() - 1
    }
}

struct Narrator<'a, W> {
    out: W,
    names: &'a [String],
}

impl<W: Write> Narrator<'_, W> {
    fn narrate(&mut self, round: &AugmentingRound<'_, i64>) -> io::Result<()> {
        let path = round.path.iter().map(|&u| self.names[u].as_str()).collect::<Vec<_>>().join(" → ");
        writeln!(self.out, "\nRound {}", round.round + 1)?;
        writeln!(self.out, "Path: {path}")?;
        writeln!(self.out, "Pushed flow: {}", round.bottleneck)?;
        writeln!(self.out, "Round cost: {}", round.cost)?;
        writeln!(self.out, "Total flow after round: {}", round.total_flow)?;
        writeln!(self.out, "Total cost after round: {}", round.total_cost)
    }
}

impl<W: Write> Observer<i64> for Narrator<'_, W> {
    fn on_augment(&mut self, round: &AugmentingRound<'_, i64>) {
        if let Err(err) = self.narrate(round) {
            log::warn!("could not narrate round {}: {err}", round.round + 1);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    TermLogger::init(args.log_level, simplelog::Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let mut network = RailNetwork::new();
    let (source, sink) = (network.source(), network.sink());

    let mut config = Config::default().trace_limit(args.trace_rounds);
    config.max_rounds = args.max_rounds;
    let mut solver = SuccessiveShortestPath::new(config);

    let stdout = io::stdout();
    let mut narrator = Narrator { out: stdout.lock(), names: &network.names };
    let result = solver.solve_with_observer(&mut network.graph, source, sink, &mut narrator);
    let mut out = narrator.out;

    let (flow, cost) = match result {
        Ok(totals) => totals,
        Err(err) => {
            log::warn!("{err}");
            (solver.total_flow(), solver.total_cost())
        }
    };

    writeln!(out, "\nTotal rounds: {}", solver.rounds())?;
    writeln!(out, "\nMaximum number of trains: {flow}")?;
    writeln!(out, "Minimum cost of routing them: {cost}\n")?;

    writeln!(out, "Final flows:")?;
    for (u, edge) in network.graph.edges().filter(|(_, e)| e.flow > 0) {
        writeln!(out, "{} -> {}: {}", network.names[u], network.names[edge.to], edge.flow)?;
    }
    Ok(())
}
