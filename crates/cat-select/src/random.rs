//! Uniform-random selection.

use cat_core::{CatError, CatResult, ResponseSet, SimRng};

use crate::selector::{extend_one_per_person, ItemSelector, SelectContext};

/// Picks uniformly among a person's unadministered items.
///
/// Draws come only from the `SimRng` threaded through the call, so a run's
/// other randomized components (e.g. the data generator) are unaffected and
/// the whole run replays from one seed.
pub struct Random;

impl ItemSelector for Random {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&self, ctx: &SelectContext<'_>, rng: &mut SimRng) -> CatResult<ResponseSet> {
        extend_one_per_person(ctx, |_, remaining| {
            rng.choose(remaining)
                .copied()
                // Unreachable: extend_one_per_person never passes an empty slice.
                .ok_or_else(|| CatError::Config("empty candidate slice".into()))
        })
    }
}
