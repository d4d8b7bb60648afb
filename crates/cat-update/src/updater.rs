//! The `ParameterUpdater` trait — the estimation extension point.

use std::fmt;

use cat_core::{CatResult, ParamTable, PersonId, ResponseSet};

/// A recoverable degradation during one update call.
///
/// Warnings never abort a run: the affected entity keeps its previous
/// estimate and the warning travels with that round's trace row so the
/// degradation is visible, not hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateWarning {
    /// The bounded maximizer did not converge for this person; the previous
    /// theta estimate was kept.
    NonConvergence { person: PersonId },
}

impl fmt::Display for UpdateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateWarning::NonConvergence { person } => {
                write!(f, "optimizer did not converge for {person}; kept previous estimate")
            }
        }
    }
}

/// New estimates produced by one update call.
#[derive(Clone, Debug)]
pub struct UpdateOutcome {
    pub persons:  ParamTable,
    pub items:    ParamTable,
    pub warnings: Vec<UpdateWarning>,
}

/// Pluggable parameter re-estimation.
///
/// Called once per round with the current estimates and the round's
/// administered set.  Implementations must be pure functions of their
/// arguments: no retained state between rounds, no mutation of inputs.
///
/// # Thread safety
///
/// `Send + Sync` — implementations may parallelize internally (per-person
/// work is independent given frozen estimates) but must merge into the
/// returned tables before returning.
pub trait ParameterUpdater: Send + Sync {
    /// Strategy name, used in configuration errors and run summaries.
    fn name(&self) -> &'static str;

    /// Compute new person and item estimates from the administered set.
    fn update(
        &self,
        persons:      &ParamTable,
        items:        &ParamTable,
        administered: &ResponseSet,
    ) -> CatResult<UpdateOutcome>;
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Discrimination column lookup with a 1PL fallback of all-ones.
pub(crate) fn discriminations(items: &ParamTable) -> Vec<f64> {
    items
        .column(cat_core::params::DISCRIMINATION)
        .map(<[f64]>::to_vec)
        .unwrap_or_else(|_| vec![1.0; items.len()])
}
