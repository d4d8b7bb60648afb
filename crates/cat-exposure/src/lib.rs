//! `cat-exposure` — the item × item co-exposure matrix.
//!
//! The matrix drives exposure-control selection: `a[i][j]` counts how many
//! persons have received both item `i` and item `j`; the diagonal counts
//! single-item exposure.  It is rebuilt from scratch off the administered
//! set every round — never patched incrementally — so it can't drift from
//! the set that defines it.

pub mod matrix;

#[cfg(test)]
mod tests;

pub use matrix::ExposureMatrix;
