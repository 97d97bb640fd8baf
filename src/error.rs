use displaydoc::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Stopped after {rounds} augmenting rounds while augmenting paths remained
    RoundLimitReached { rounds: usize },
}

impl std::error::Error for Error {}
