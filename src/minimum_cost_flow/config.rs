/// Solver settings.
///
/// Both limits are off by default: the solver augments until no path is left and reports every
/// round to its observer.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_rounds: Option<usize>,
    pub trace_limit: Option<usize>,
}

impl Config {
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    pub fn trace_limit(mut self, trace_limit: usize) -> Self {
        self.trace_limit = Some(trace_limit);
        self
    }

    #[inline]
    pub(crate) fn traces(&self, round: usize) -> bool {
        self.trace_limit.map_or(true, |limit| round < limit)
    }

    #[inline]
    pub(crate) fn allows(&self, round: usize) -> bool {
        self.max_rounds.map_or(true, |limit| round < limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_exclusive() {
        let config = Config::default().max_rounds(2).trace_limit(0);
        assert!(config.allows(1));
        assert!(!config.allows(2));
        assert!(!config.traces(0));

        let config = Config::default();
        assert!(config.allows(usize::MAX - 1));
        assert!(config.traces(1_000));
    }
}
