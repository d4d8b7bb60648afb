//! Fluent builder for constructing a [`Simulation`].

use cat_core::{ParamTable, SimRng};
use cat_data::DataLoader;
use cat_select::ItemSelector;
use cat_update::ParameterUpdater;

use crate::{SimConfig, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<S, U>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, fix mode, round cap
/// - `L: DataLoader` — supplies the universe and both truth tables
/// - `S: ItemSelector` — the selection strategy
/// - `U: ParameterUpdater` — the update strategy
///
/// # Optional inputs (have defaults)
///
/// | Method                          | Default                         |
/// |---------------------------------|---------------------------------|
/// | `.initial_estimates(p, i)`      | zero-valued copies of truth     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(
///     SimConfig::new(42),
///     SyntheticLoader::new(100, 40, 42),
///     MaxInformation,
///     BoundedMle::new(),
/// )
/// .build()?;
/// let output = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<L: DataLoader, S: ItemSelector, U: ParameterUpdater> {
    config:   SimConfig,
    loader:   L,
    selector: S,
    updater:  U,
    init:     Option<(ParamTable, ParamTable)>,
}

impl<L: DataLoader, S: ItemSelector, U: ParameterUpdater> SimBuilder<L, S, U> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, loader: L, selector: S, updater: U) -> Self {
        Self { config, loader, selector, updater, init: None }
    }

    /// Supply starting estimates instead of the zero-valued default.
    ///
    /// Both tables must match the truth tables in length and column set;
    /// ignored for any side pinned by [`FixMode`][crate::FixMode].
    pub fn initial_estimates(mut self, persons: ParamTable, items: ParamTable) -> Self {
        self.init = Some((persons, items));
        self
    }

    /// Load the bundle, validate shapes, and return a ready-to-run
    /// [`Simulation`].
    pub fn build(self) -> SimResult<Simulation<S, U>> {
        let bundle = self.loader.load()?;

        // ── Resolve starting estimates ────────────────────────────────────
        let (person_estimate, item_estimate) = match self.init {
            Some((persons, items)) => {
                if !persons.same_shape(&bundle.person_truth) {
                    return Err(SimError::DimensionMismatch {
                        expected: bundle.person_truth.len(),
                        got:      persons.len(),
                        what:     "initial person estimates",
                    });
                }
                if !items.same_shape(&bundle.item_truth) {
                    return Err(SimError::DimensionMismatch {
                        expected: bundle.item_truth.len(),
                        got:      items.len(),
                        what:     "initial item estimates",
                    });
                }
                (persons, items)
            }
            None => (bundle.person_truth.zeros_like(), bundle.item_truth.zeros_like()),
        };

        // A pinned side starts at truth and never leaves it.
        let fix = self.config.fix;
        let person_estimate = if fix.persons_fixed() {
            bundle.person_truth.clone()
        } else {
            person_estimate
        };
        let item_estimate = if fix.items_fixed() {
            bundle.item_truth.clone()
        } else {
            item_estimate
        };

        if bundle.n_persons() == 0 || bundle.n_items() == 0 {
            return Err(SimError::Config(format!(
                "cannot simulate an empty population ({} persons, {} items)",
                bundle.n_persons(),
                bundle.n_items()
            )));
        }

        let rng = SimRng::new(self.config.seed);
        Ok(Simulation {
            config: self.config,
            universe: bundle.universe,
            person_truth: bundle.person_truth,
            item_truth: bundle.item_truth,
            person_estimate,
            item_estimate,
            selector: self.selector,
            updater: self.updater,
            rng,
        })
    }
}
