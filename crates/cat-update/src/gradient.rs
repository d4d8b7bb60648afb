//! Elo-style simultaneous gradient update.

use cat_core::irt::logistic;
use cat_core::params::{DIFFICULTY, THETA};
use cat_core::{CatResult, ParamTable, ResponseSet};

use crate::updater::{ParameterUpdater, UpdateOutcome};

/// The "maths garden" update: one gradient step for every person and every
/// item off a single snapshot of expected outcomes.
///
/// With `E = logistic(θ − b)` computed from the pre-update estimates:
///
///   θ  += k_person · Σ (observed − E)   over the person's records
///   b  += k_item   · Σ (E − observed)   over the item's records
///
/// Both sides use the *same* expectation snapshot — the item step must not
/// see the already-moved thetas, or the two learning rates stop being
/// independent knobs.
pub struct EloGradient {
    pub k_person: f64,
    pub k_item:   f64,
}

impl EloGradient {
    pub fn new(k_person: f64, k_item: f64) -> Self {
        Self { k_person, k_item }
    }
}

impl ParameterUpdater for EloGradient {
    fn name(&self) -> &'static str {
        "elo_gradient"
    }

    fn update(
        &self,
        persons:      &ParamTable,
        items:        &ParamTable,
        administered: &ResponseSet,
    ) -> CatResult<UpdateOutcome> {
        let theta = persons.column(THETA)?;
        let b = items.column(DIFFICULTY)?;

        let mut person_step = vec![0.0; persons.len()];
        let mut item_step = vec![0.0; items.len()];
        for r in administered.iter() {
            let expected = logistic(theta[r.person.index()] - b[r.item.index()]);
            let residual = r.outcome as f64 - expected;
            person_step[r.person.index()] += residual;
            item_step[r.item.index()] -= residual;
        }

        let mut new_persons = persons.clone();
        for (value, step) in new_persons.column_mut(THETA)?.iter_mut().zip(person_step) {
            *value += self.k_person * step;
        }
        let mut new_items = items.clone();
        for (value, step) in new_items.column_mut(DIFFICULTY)?.iter_mut().zip(item_step) {
            *value += self.k_item * step;
        }

        Ok(UpdateOutcome {
            persons:  new_persons,
            items:    new_items,
            warnings: Vec::new(),
        })
    }
}
