//! Maximum-Fisher-information selection.

use cat_core::{CatResult, ItemId, PersonId, ResponseSet, SimRng};

use crate::selector::{extend_one_per_person, ItemSelector, SelectContext};

/// Administers the unadministered item with the highest 2PL Fisher
/// information `I = a² · P · (1 − P)` at the person's current estimate.
pub struct MaxInformation;

impl ItemSelector for MaxInformation {
    fn name(&self) -> &'static str {
        "max_information"
    }

    fn select(&self, ctx: &SelectContext<'_>, _rng: &mut SimRng) -> CatResult<ResponseSet> {
        extend_one_per_person(ctx, |person, remaining| most_informative(ctx, person, remaining))
    }
}

/// Argmax of Fisher information over `candidates` (non-empty).  Exact ties
/// keep the lowest item id, so results are reproducible.
pub(crate) fn most_informative(
    ctx:        &SelectContext<'_>,
    person:     PersonId,
    candidates: &[ItemId],
) -> CatResult<ItemId> {
    let mut best_item = candidates[0];
    let mut best_info = f64::NEG_INFINITY;
    for &item in candidates {
        let info = ctx.information(person, item)?;
        if info > best_info {
            best_info = info;
            best_item = item;
        }
    }
    Ok(best_item)
}
