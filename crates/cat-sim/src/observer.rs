//! Simulation observer trait for progress reporting.

use cat_update::UpdateWarning;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the round loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_round_end(&mut self, round: usize, administered: usize) {
///         println!("round {round}: {administered} responses administered");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each round, before selection.
    fn on_round_start(&mut self, _round: usize) {}

    /// Called for every recoverable degradation the update step reports.
    ///
    /// The warning also travels with the round's trace row; this hook
    /// exists so a long run can surface degradations as they happen.
    fn on_warning(&mut self, _round: usize, _warning: &UpdateWarning) {}

    /// Called at the end of each round.
    ///
    /// `administered` is the total size of the administered set after this
    /// round's selection.
    fn on_round_end(&mut self, _round: usize, _administered: usize) {}

    /// Called once, after the fixed-point round completes.
    fn on_sim_end(&mut self, _rounds: usize) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
