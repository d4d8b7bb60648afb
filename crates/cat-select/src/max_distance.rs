//! Network-distance selection over the co-exposure graph.
//!
//! Both variants rank a person's unadministered candidates by how far they
//! sit (all-pairs shortest path) from the closest item that person has
//! already received, administering the farthest — i.e. the item least
//! entangled with what the person has seen.  [`MaxDistance`] uses the plain
//! reciprocal edge weighting; [`MaxDistanceEnhanced`] accepts any
//! [`EdgeWeight`] transform.

use cat_core::{CatError, CatResult, ItemId, PersonId, ResponseSet, SimRng};
use cat_network::{DistanceMatrix, EdgeWeight};

use crate::max_info::most_informative;
use crate::selector::{extend_one_per_person, ItemSelector, SelectContext};

// ── MaxDistance ───────────────────────────────────────────────────────────────

/// Max-distance selection with `1 / count` edge weights.
///
/// `n_candidates` widens the shortlist: the top-n farthest candidates are
/// kept and the tie is broken by Fisher information.  `n_candidates = 1`
/// reduces to pure max-distance (information only breaks exact distance
/// ties).
pub struct MaxDistance {
    n_candidates: usize,
}

impl MaxDistance {
    pub fn new(n_candidates: usize) -> Self {
        Self { n_candidates }
    }
}

impl ItemSelector for MaxDistance {
    fn name(&self) -> &'static str {
        "max_distance"
    }

    fn needs_exposure(&self) -> bool {
        true
    }

    fn select(&self, ctx: &SelectContext<'_>, _rng: &mut SimRng) -> CatResult<ResponseSet> {
        select_by_distance(ctx, self.name(), self.n_candidates, &EdgeWeight::inverse())
    }
}

// ── MaxDistanceEnhanced ───────────────────────────────────────────────────────

/// Max-distance selection with a pluggable count → weight transform
/// controlling how strongly high co-exposure is penalized.
pub struct MaxDistanceEnhanced {
    n_candidates: usize,
    weight:       EdgeWeight,
}

impl MaxDistanceEnhanced {
    pub fn new(n_candidates: usize, weight: EdgeWeight) -> Self {
        Self { n_candidates, weight }
    }
}

impl ItemSelector for MaxDistanceEnhanced {
    fn name(&self) -> &'static str {
        "max_distance_enhanced"
    }

    fn needs_exposure(&self) -> bool {
        true
    }

    fn select(&self, ctx: &SelectContext<'_>, _rng: &mut SimRng) -> CatResult<ResponseSet> {
        select_by_distance(ctx, self.name(), self.n_candidates, &self.weight)
    }
}

// ── Shared ranking core ───────────────────────────────────────────────────────

fn select_by_distance(
    ctx:          &SelectContext<'_>,
    strategy:     &'static str,
    n_candidates: usize,
    weight:       &EdgeWeight,
) -> CatResult<ResponseSet> {
    if n_candidates == 0 {
        return Err(CatError::Config(format!(
            "{strategy}: n_candidates must be at least 1"
        )));
    }
    let exposure = ctx
        .exposure
        .ok_or(CatError::MissingExposureMatrix { strategy })?;

    // The exposure matrix is round-constant, so one all-pairs computation
    // serves every person this round.
    let distances = DistanceMatrix::build(exposure, weight)?;

    extend_one_per_person(ctx, |person, remaining| {
        farthest_candidate(ctx, &distances, person, remaining, n_candidates)
    })
}

/// Rank `remaining` by min-distance-to-administered descending, keep the top
/// `n_candidates` (plus anything tying the cutoff distance), and break the
/// tie by Fisher information.
///
/// Ties at the cutoff are kept so the information tie-break sees every
/// equally-far candidate — with `n_candidates = 1` and a uniformly weighted
/// graph this is what makes the pick deterministic rather than positional.
fn farthest_candidate(
    ctx:          &SelectContext<'_>,
    distances:    &DistanceMatrix,
    person:       PersonId,
    remaining:    &[ItemId],
    n_candidates: usize,
) -> CatResult<ItemId> {
    // Some by construction: extend_one_per_person handles the bootstrap
    // round before any per-person pick runs.
    let administered = ctx
        .administered
        .ok_or_else(|| CatError::Config("distance pick before bootstrap".into()))?;

    let mut ranked: Vec<(ItemId, f64)> = remaining
        .iter()
        .map(|&item| {
            let d = distances.min_distance_to(item, administered.items_for(person));
            (item, d)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let cutoff = ranked[n_candidates.min(ranked.len()) - 1].1;
    let shortlist: Vec<ItemId> = ranked
        .into_iter()
        .take_while(|&(_, d)| d >= cutoff)
        .map(|(item, _)| item)
        .collect();
    most_informative(ctx, person, &shortlist)
}
