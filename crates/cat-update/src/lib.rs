//! `cat-update` — parameter re-estimation strategies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`updater`] | `ParameterUpdater` trait, `UpdateOutcome`, warnings       |
//! | [`mle`]     | `BoundedMle` — per-person bounded likelihood maximization |
//! | [`gradient`]| `EloGradient` — simultaneous person/item gradient step    |
//! | [`paired`]  | `PairedGradient` — drift-resistant item adjustment        |
//!
//! All three read the administered set and the current estimates, and return
//! fresh estimate tables — inputs are never mutated, so the driver can hand
//! the same snapshot to selection and update within a round.

pub mod gradient;
pub mod mle;
pub mod paired;
pub mod updater;

#[cfg(test)]
mod tests;

pub use gradient::EloGradient;
pub use mle::BoundedMle;
pub use paired::PairedGradient;
pub use updater::{ParameterUpdater, UpdateOutcome, UpdateWarning};
