//! The loader contract.

use cat_core::{CatResult, ParamTable, ResponseUniverse};

/// Everything a simulation needs about its population, delivered once.
#[derive(Clone, Debug)]
pub struct Bundle {
    /// One pre-simulated response per (person, item) pair.
    pub universe:     ResponseUniverse,
    /// True person parameters, indexed by `PersonId`.
    pub person_truth: ParamTable,
    /// True item parameters, indexed by `ItemId`.
    pub item_truth:   ParamTable,
}

impl Bundle {
    /// Dimensions must agree between the universe and both truth tables.
    pub fn n_persons(&self) -> usize {
        self.universe.n_persons()
    }

    pub fn n_items(&self) -> usize {
        self.universe.n_items()
    }
}

/// Supplies the input bundle for one simulation run.
///
/// Loaders are invoked exactly once, before the first round; the bundle is
/// read-only truth for the rest of the run.
pub trait DataLoader {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Produce the bundle, validating internal consistency.
    fn load(&self) -> CatResult<Bundle>;
}
