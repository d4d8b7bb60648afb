//! The `Simulation` struct and its round loop.

use cat_core::{ParamTable, ResponseSet, ResponseUniverse, SimRng};
use cat_exposure::ExposureMatrix;
use cat_select::{ItemSelector, SelectContext};
use cat_update::ParameterUpdater;

use crate::trace::{IterationRecord, SimOutput};
use crate::{SimConfig, SimError, SimObserver, SimResult};

/// The simulation driver.
///
/// `Simulation<S, U>` owns the full iteration state and drives the
/// round loop to its fixed point:
///
/// 1. **Select**: the strategy reads the current estimates, the universe,
///    and the previous round's exposure matrix, and returns an enlarged
///    administered set (the deterministic bootstrap on the first round).
/// 2. **Update**: the update strategy re-estimates from the enlarged set;
///    sides pinned by the fix mode keep truth.
/// 3. **Record**: the exposure matrix is rebuilt from scratch off the
///    enlarged set, and a trace row (estimates, biases, warnings) is
///    appended.  The fixed-point round itself is still recorded.
/// 4. **Check**: the run ends normally when a round's selection output
///    equals its input under record-set equality.  A round that fails to
///    grow the set while unadministered items remain aborts the run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<S: ItemSelector, U: ParameterUpdater> {
    /// Global configuration (seed, fix mode, round cap).
    pub config: SimConfig,

    /// The complete pre-simulated response universe — read-only truth
    /// about what every person would answer on every item.
    pub universe: ResponseUniverse,

    /// True person parameters (immutable for the run's lifetime).
    pub person_truth: ParamTable,

    /// True item parameters (immutable for the run's lifetime).
    pub item_truth: ParamTable,

    /// Current person estimates, overwritten each round unless pinned.
    pub person_estimate: ParamTable,

    /// Current item estimates, overwritten each round unless pinned.
    pub item_estimate: ParamTable,

    /// The selection strategy.  Called once per round.
    pub selector: S,

    /// The update strategy.  Called once per round.
    pub updater: U,

    /// Master RNG; each round draws from its own child generator so a
    /// strategy's consumption pattern cannot perturb later rounds.
    pub rng: SimRng,
}

impl<S: ItemSelector, U: ParameterUpdater> Simulation<S, U> {
    /// Run to the fixed point and return the full trace.
    ///
    /// Calls observer hooks at every round boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimOutput> {
        let n_persons = self.universe.n_persons();
        let n_items = self.universe.n_items();
        let universe_size = n_persons * n_items;
        let cap = self.config.round_cap(n_items);

        let mut administered: Option<ResponseSet> = None;
        let mut results: Vec<IterationRecord> = Vec::new();
        let mut exposures: Vec<ExposureMatrix> = Vec::new();
        // Stand-in for the bootstrap round, before anything is administered.
        let initial_exposure = ExposureMatrix::zero(n_items);

        for round in 1..=cap {
            observer.on_round_start(round);

            // ── Select ────────────────────────────────────────────────────
            let candidate = {
                let ctx = SelectContext {
                    persons:      &self.person_estimate,
                    items:        &self.item_estimate,
                    universe:     &self.universe,
                    administered: administered.as_ref(),
                    exposure:     Some(exposures.last().unwrap_or(&initial_exposure)),
                };
                let mut round_rng = self.rng.child(round as u64);
                self.selector.select(&ctx, &mut round_rng)?
            };

            // Growth contract: the candidate must contain every previous
            // record, and must be strictly larger unless the universe is
            // exhausted.  Anything else breaks the termination guarantee.
            if let Some(prev) = &administered {
                let stalled = candidate.len() == prev.len() && candidate.len() < universe_size;
                if stalled || !candidate.is_superset_of(prev) {
                    return Err(SimError::NonMonotonicSelection { round });
                }
            }

            // ── Update ────────────────────────────────────────────────────
            let outcome =
                self.updater
                    .update(&self.person_estimate, &self.item_estimate, &candidate)?;
            for warning in &outcome.warnings {
                observer.on_warning(round, warning);
            }
            if !self.config.fix.persons_fixed() {
                self.person_estimate = outcome.persons;
            }
            if !self.config.fix.items_fixed() {
                self.item_estimate = outcome.items;
            }

            // ── Record ────────────────────────────────────────────────────
            exposures.push(ExposureMatrix::build(&candidate, n_persons, n_items));
            results.push(IterationRecord {
                round,
                person_estimate: self.person_estimate.clone(),
                person_bias:     self.person_truth.bias_against(&self.person_estimate)?,
                item_estimate:   self.item_estimate.clone(),
                item_bias:       self.item_truth.bias_against(&self.item_estimate)?,
                warnings:        outcome.warnings,
            });
            observer.on_round_end(round, candidate.len());

            // ── Check ─────────────────────────────────────────────────────
            let fixed_point = administered
                .as_ref()
                .is_some_and(|prev| candidate.same_records(prev));
            administered = Some(candidate);
            if fixed_point {
                observer.on_sim_end(round);
                return Ok(SimOutput {
                    results,
                    exposure_matrices: exposures,
                    person_truth: self.person_truth.clone(),
                    item_truth: self.item_truth.clone(),
                });
            }
        }

        Err(SimError::RoundCapExceeded { cap })
    }
}
