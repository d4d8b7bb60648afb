//! Bounded maximum-likelihood ability estimation.

use rayon::prelude::*;

use cat_core::irt::log_likelihood_2pl;
use cat_core::params::{DIFFICULTY, THETA};
use cat_core::{CatResult, ParamTable, PersonId, ResponseSet};

use crate::updater::{discriminations, ParameterUpdater, UpdateOutcome, UpdateWarning};

/// Maximum-likelihood theta update with item parameters held fixed.
///
/// Each person's Bernoulli log-likelihood is maximized independently on the
/// bounded interval by golden-section search.  Persons are independent given
/// frozen item estimates, so the search runs across persons on Rayon's
/// thread pool.
///
/// A person with no administered responses, or whose search fails to shrink
/// the bracket below `tol` within `max_iter` steps, keeps their previous
/// estimate; the latter case is surfaced as a
/// [`UpdateWarning::NonConvergence`].
pub struct BoundedMle {
    /// Theta search interval, inclusive.
    pub bounds:   (f64, f64),
    /// Bracket width at which the search accepts the midpoint.
    pub tol:      f64,
    /// Iteration cap for one person's search.
    pub max_iter: usize,
}

impl BoundedMle {
    /// The standard configuration: θ ∈ [-4, 4], tolerance 1e-6.
    pub fn new() -> Self {
        Self {
            bounds:   (-4.0, 4.0),
            tol:      1e-6,
            max_iter: 200,
        }
    }
}

impl Default for BoundedMle {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterUpdater for BoundedMle {
    fn name(&self) -> &'static str {
        "bounded_mle"
    }

    fn update(
        &self,
        persons:      &ParamTable,
        items:        &ParamTable,
        administered: &ResponseSet,
    ) -> CatResult<UpdateOutcome> {
        let prev_theta = persons.column(THETA)?;
        let b = items.column(DIFFICULTY)?;
        let a = discriminations(items);

        let estimates: Vec<(f64, Option<UpdateWarning>)> = (0..persons.len())
            .into_par_iter()
            .map(|p| {
                let person = PersonId(p as u32);
                let responses: Vec<(f64, f64, u8)> = administered
                    .records_for(person)
                    .map(|r| (a[r.item.index()], b[r.item.index()], r.outcome))
                    .collect();
                if responses.is_empty() {
                    return (prev_theta[p], None);
                }
                match maximize_bounded(
                    |theta| log_likelihood_2pl(theta, responses.iter().copied()),
                    self.bounds,
                    self.tol,
                    self.max_iter,
                ) {
                    Some(theta) => (theta, None),
                    None => (prev_theta[p], Some(UpdateWarning::NonConvergence { person })),
                }
            })
            .collect();

        let mut new_persons = persons.clone();
        let mut warnings = Vec::new();
        {
            let theta = new_persons.column_mut(THETA)?;
            for (p, (value, warning)) in estimates.into_iter().enumerate() {
                theta[p] = value;
                warnings.extend(warning);
            }
        }

        Ok(UpdateOutcome {
            persons: new_persons,
            items:   items.clone(),
            warnings,
        })
    }
}

/// Golden-section search for the maximum of a unimodal function on `[a, b]`.
///
/// Returns `None` if the bracket fails to shrink below `tol` within
/// `max_iter` iterations.
fn maximize_bounded<F>(f: F, (mut a, mut b): (f64, f64), tol: f64, max_iter: usize) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    for _ in 0..max_iter {
        if (b - a) <= tol {
            return Some((a + b) / 2.0);
        }
        let c = b - (b - a) / phi;
        let d = a + (b - a) / phi;
        if f(c) > f(d) {
            b = d;
        } else {
            a = c;
        }
    }
    None
}
