pub mod config;
pub mod cycle_canceling;
pub mod successive_shortest_path;
pub mod trace;
