use std::fmt::Display;

/// One augmentation, as seen right after the flow was pushed.
#[derive(Debug)]
pub struct AugmentingRound<'a, Flow> {
    pub round: usize,
    // nodes from source to sink
    pub path: &'a [usize],
    pub bottleneck: Flow,
    pub unit_cost: Flow,
    pub cost: Flow,
    pub total_flow: Flow,
    pub total_cost: Flow,
}

/// Receives the rounds of a solve. Observers only read; they have no way to influence the solver.
pub trait Observer<Flow> {
    fn on_augment(&mut self, round: &AugmentingRound<'_, Flow>);
}

impl<Flow> Observer<Flow> for () {
    #[inline]
    fn on_augment(&mut self, _: &AugmentingRound<'_, Flow>) {}
}

/// Writes every reported round to the `info` log.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogObserver;

impl<Flow: Display> Observer<Flow> for LogObserver {
    fn on_augment(&mut self, round: &AugmentingRound<'_, Flow>) {
        let path = round.path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" -> ");
        log::info!(
            "round {}: path {}, pushed {}, round cost {}, total flow {}, total cost {}",
            round.round + 1,
            path,
            round.bottleneck,
            round.cost,
            round.total_flow,
            round.total_cost
        );
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RoundSummary<Flow> {
    pub round: usize,
    pub path: Vec<usize>,
    pub bottleneck: Flow,
    pub unit_cost: Flow,
    pub cost: Flow,
}

impl<Flow: Copy> From<&AugmentingRound<'_, Flow>> for RoundSummary<Flow> {
    fn from(round: &AugmentingRound<'_, Flow>) -> Self {
        Self { round: round.round, path: round.path.to_vec(), bottleneck: round.bottleneck, unit_cost: round.unit_cost, cost: round.cost }
    }
}

/// Keeps an owned copy of every reported round.
#[derive(Debug, Clone)]
pub struct RoundRecorder<Flow> {
    pub rounds: Vec<RoundSummary<Flow>>,
}

impl<Flow> Default for RoundRecorder<Flow> {
    fn default() -> Self {
        Self { rounds: Vec::new() }
    }
}

impl<Flow: Copy> Observer<Flow> for RoundRecorder<Flow> {
    fn on_augment(&mut self, round: &AugmentingRound<'_, Flow>) {
        self.rounds.push(round.into());
    }
}
