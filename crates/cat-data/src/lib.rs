//! Data-loader collaborators for the adaptive-testing simulator.
//!
//! A loader supplies the three ingredients of a run, once, at startup:
//!
//! | Piece          | Meaning                                                |
//! |----------------|--------------------------------------------------------|
//! | `universe`     | one pre-simulated response per (person, item) pair     |
//! | `person_truth` | immutable person parameters (`theta`, …)               |
//! | `item_truth`   | immutable item parameters (`b`, optionally `a`, …)     |
//!
//! Two loaders are bundled: [`CsvLoader`] reads the triple from three CSV
//! files, and [`SyntheticLoader`] draws truths from a standard normal and
//! pre-simulates the universe under the logistic response model — handy for
//! tests and parameter-recovery experiments.

pub mod csv;
pub mod loader;
pub mod synthetic;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvLoader;
pub use loader::{Bundle, DataLoader};
pub use synthetic::SyntheticLoader;
