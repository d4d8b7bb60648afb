//! Fixed-form selection: items in universe order.

use cat_core::{CatResult, ResponseSet, SimRng};

use crate::selector::{extend_one_per_person, ItemSelector, SelectContext};

/// Administers items strictly in universe order — every person works through
/// the same fixed test form.  The baseline against which adaptive strategies
/// are compared.
pub struct Sequential;

impl ItemSelector for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn select(&self, ctx: &SelectContext<'_>, _rng: &mut SimRng) -> CatResult<ResponseSet> {
        // `unadministered_for` yields item-id order, so the head is the next
        // item on the form.
        extend_one_per_person(ctx, |_, remaining| Ok(remaining[0]))
    }
}
