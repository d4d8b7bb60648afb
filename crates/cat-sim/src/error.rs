use cat_core::CatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match population size {expected}")]
    DimensionMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    /// A selection strategy shrank the administered set, or failed to grow
    /// it while unadministered items remained.  Fatal: the fixed-point
    /// termination guarantee no longer holds.
    #[error("selection strategy violated monotonic growth in round {round}")]
    NonMonotonicSelection { round: usize },

    /// The run hit the round cap without reaching a fixed point.
    #[error("no fixed point within {cap} rounds")]
    RoundCapExceeded { cap: usize },

    #[error("trace output error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Core(#[from] CatError),
}

pub type SimResult<T> = Result<T, SimError>;
