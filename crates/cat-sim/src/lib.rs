//! `cat-sim` — fixed-point simulation driver for computer adaptive testing.
//!
//! # The round loop
//!
//! ```text
//! for round in 1..=cap:
//!   ① Select  — strategy returns an enlarged administered-response set
//!               (deterministic 5-item bootstrap on the first round).
//!   ② Update  — strategy re-estimates person/item parameters from the
//!               enlarged set; pinned sides keep truth.
//!   ③ Record  — exposure matrix rebuilt from scratch; trace row appended
//!               (estimates, truth − estimate biases, update warnings).
//!   ④ Check   — selection output == input (record-set equality) → done.
//! ```
//!
//! A run ends one of three ways: normally at the fixed point, fatally when
//! a strategy breaks monotonic growth, or fatally at the round cap.
//! Optimizer non-convergence is none of these — it degrades a single
//! estimate, is reported as a warning on the round, and the run continues.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cat_data::SyntheticLoader;
//! use cat_select::MaxInformation;
//! use cat_sim::{NoopObserver, SimBuilder, SimConfig, write_trace_csv};
//! use cat_update::BoundedMle;
//!
//! let mut sim = SimBuilder::new(
//!     SimConfig::new(42),
//!     SyntheticLoader::new(100, 40, 42),
//!     MaxInformation,
//!     BoundedMle::new(),
//! )
//! .build()?;
//! let output = sim.run(&mut NoopObserver)?;
//! write_trace_csv(&output, std::fs::File::create("trace.csv")?)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trace;


pub use builder::SimBuilder;
pub use config::{FixMode, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
pub use trace::{write_trace_csv, IterationRecord, SimOutput};
