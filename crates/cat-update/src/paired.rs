//! Drift-resistant paired gradient update.

use cat_core::irt::logistic;
use cat_core::params::{DIFFICULTY, THETA};
use cat_core::{CatResult, ParamTable, PersonId, ResponseSet};

use crate::updater::{ParameterUpdater, UpdateOutcome};

/// The "prowise" update: theta moves exactly as in
/// [`EloGradient`][crate::EloGradient], but item difficulty moves only in
/// offsetting pairs.
///
/// Walking one person's records in administration order, each consecutive
/// pair of items contributes a single signed adjustment
///
///   κ = ½ · k_item · [(s_now − e_now) − (s_prev − e_prev)]
///
/// applied as `+κ` to the later item and `−κ` to the earlier one.  Every
/// person's difficulty contributions therefore sum to exactly zero, which
/// pins the difficulty scale in place — no response sequence can push all
/// items up or down together (rating drift).
pub struct PairedGradient {
    pub k_person: f64,
    pub k_item:   f64,
}

impl PairedGradient {
    pub fn new(k_person: f64, k_item: f64) -> Self {
        Self { k_person, k_item }
    }
}

impl ParameterUpdater for PairedGradient {
    fn name(&self) -> &'static str {
        "paired_gradient"
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

        for p in 0..persons.len() {
            let person = PersonId(p as u32);
            // Residuals in administration order, all off the pre-update
            // estimate snapshot.
            let residuals: Vec<(usize, f64)> = administered
                .records_for(person)
                .map(|r| {
                    let expected = logistic(theta[p] - b[r.item.index()]);
                    (r.item.index(), r.outcome as f64 - expected)
                })
                .collect();

            for (_, residual) in &residuals {
                person_step[p] += residual;
            }
            for pair in residuals.windows(2) {
                let (prev_item, prev_residual) = pair[0];
                let (now_item, now_residual) = pair[1];
                let kappa = 0.5 * self.k_item * (now_residual - prev_residual);
                item_step[now_item] += kappa;
                item_step[prev_item] -= kappa;
            }
        }

        let mut new_persons = persons.clone();
        for (value, step) in new_persons.column_mut(THETA)?.iter_mut().zip(person_step) {
            *value += self.k_person * step;
        }
        let mut new_items = items.clone();
        for (value, step) in new_items.column_mut(DIFFICULTY)?.iter_mut().zip(item_step) {
            *value += step; // κ already carries k_item
        }

        Ok(UpdateOutcome {
            persons:  new_persons,
            items:    new_items,
            warnings: Vec::new(),
        })
    }
}
