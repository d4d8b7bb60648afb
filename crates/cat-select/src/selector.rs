//! The `ItemSelector` trait — the selection extension point.

use cat_core::params::{DISCRIMINATION, DIFFICULTY, THETA};
use cat_core::{CatResult, ItemId, ParamTable, PersonId, ResponseSet, ResponseUniverse, SimRng};
use cat_exposure::ExposureMatrix;

/// Size of the deterministic bootstrap subset: every strategy starts every
/// person on the first five items in universe order (fewer if the pool is
/// smaller).
pub const BOOTSTRAP_ITEMS: usize = 5;

// ── SelectContext ─────────────────────────────────────────────────────────────

/// Read-only snapshot handed to a selector for one round.
///
/// Borrowing everything in one bundle keeps selector signatures stable as
/// the driver grows and makes the no-mutation rule structural: a selector
/// can only read.
pub struct SelectContext<'a> {
    /// Current person estimates (at minimum a `theta` column).
    pub persons: &'a ParamTable,
    /// Current item estimates (at minimum a `b` column; optionally `a`).
    pub items: &'a ParamTable,
    /// The complete pre-simulated response universe.
    pub universe: &'a ResponseUniverse,
    /// Administered set so far; `None` on the first call of a run.
    pub administered: Option<&'a ResponseSet>,
    /// Current co-exposure matrix; required by distance-based strategies.
    pub exposure: Option<&'a ExposureMatrix>,
}

impl<'a> SelectContext<'a> {
    /// Current ability estimate for one person.
    pub fn theta(&self, person: PersonId) -> CatResult<f64> {
        self.persons.value(THETA, person.index())
    }

    /// Current difficulty estimate for one item.
    pub fn difficulty(&self, item: ItemId) -> CatResult<f64> {
        self.items.value(DIFFICULTY, item.index())
    }

    /// Current discrimination estimate for one item; 1.0 under a
    /// one-parameter model (no `a` column).
    pub fn discrimination(&self, item: ItemId) -> f64 {
        self.items
            .value(DISCRIMINATION, item.index())
            .unwrap_or(1.0)
    }

    /// Fisher information of `item` at `person`'s current estimate.
    pub fn information(&self, person: PersonId, item: ItemId) -> CatResult<f64> {
        Ok(cat_core::irt::fisher_info_2pl(
            self.theta(person)?,
            self.discrimination(item),
            self.difficulty(item)?,
        ))
    }

    /// Items not yet administered to `person`, in universe (item-id) order.
    pub fn unadministered_for(&self, person: PersonId) -> Vec<ItemId> {
        let administered = self.administered;
        (0..self.universe.n_items() as u32)
            .map(ItemId)
            .filter(|&item| !administered.is_some_and(|set| set.contains(person, item)))
            .collect()
    }
}

// ── ItemSelector ──────────────────────────────────────────────────────────────

/// Pluggable item selection.
///
/// Implementations are chosen at construction and dispatched statically per
/// run.  They must be pure with respect to their inputs: no retained mutable
/// state between calls, no mutation of the context.  Randomized strategies
/// draw only from the `SimRng` threaded through the call.
///
/// # Thread safety
///
/// `Send + Sync` so a selector can be shared with parallel per-person
/// machinery without ceremony.
pub trait ItemSelector: Send + Sync {
    /// Strategy name, used in configuration errors and run summaries.
    fn name(&self) -> &'static str;

    /// `true` if [`select`][Self::select] requires `ctx.exposure`.
    fn needs_exposure(&self) -> bool {
        false
    }

    /// Produce the enlarged administered set for this round.
    fn select(&self, ctx: &SelectContext<'_>, rng: &mut SimRng) -> CatResult<ResponseSet>;
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// The fixed first-round subset: the first [`BOOTSTRAP_ITEMS`] items in
/// universe order, for every person.
pub(crate) fn bootstrap(universe: &ResponseUniverse) -> ResponseSet {
    let take = BOOTSTRAP_ITEMS.min(universe.n_items());
    let mut set = ResponseSet::with_capacity(universe.n_persons() * take);
    for p in 0..universe.n_persons() as u32 {
        for record in universe.records_for(PersonId(p)).take(take) {
            set.insert(record);
        }
    }
    set
}

/// Grow `ctx.administered` by at most one record per person, chosen by
/// `pick` from that person's unadministered remainder (never empty when
/// called).  Handles the bootstrap round uniformly for all strategies.
pub(crate) fn extend_one_per_person<F>(
    ctx: &SelectContext<'_>,
    mut pick: F,
) -> CatResult<ResponseSet>
where
    F: FnMut(PersonId, &[ItemId]) -> CatResult<ItemId>,
{
    let Some(administered) = ctx.administered else {
        return Ok(bootstrap(ctx.universe));
    };

    let mut next = administered.clone();
    for p in 0..ctx.universe.n_persons() as u32 {
        let person = PersonId(p);
        let remaining = ctx.unadministered_for(person);
        if remaining.is_empty() {
            continue; // person exhausted the pool
        }
        let item = pick(person, &remaining)?;
        next.insert(ctx.universe.response(person, item));
    }
    Ok(next)
}
