//! Response storage: single records, the pre-simulated universe, and the
//! growing administered set.
//!
//! # The two collections
//!
//! - [`ResponseUniverse`] is the complete, read-only (person × item) grid of
//!   pre-simulated outcomes — "what would happen if this item were
//!   administered to this person".  Exactly one record per pair.
//! - [`ResponseSet`] is the administered subset for one run.  It only grows,
//!   and it remembers insertion order: per-person administration order is
//!   load-bearing for the paired-gradient updater.
//!
//! Membership lookups go through an `FxHashSet` index so per-round
//! set-difference scans stay O(1) per pair.

use rustc_hash::FxHashSet;

use crate::{CatError, CatResult, ItemId, PersonId};

// ── Response ──────────────────────────────────────────────────────────────────

/// One dichotomous response: `person` answered `item` with `outcome` ∈ {0, 1}.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    pub person:  PersonId,
    pub item:    ItemId,
    pub outcome: u8,
}

// ── ResponseUniverse ──────────────────────────────────────────────────────────

/// The complete pre-simulated outcome grid, person-major.
///
/// "Universe order" — person 0's items in id order, then person 1's, … —
/// defines the deterministic bootstrap subset and the sequential strategy's
/// ranking.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseUniverse {
    n_persons: usize,
    n_items:   usize,
    /// `outcomes[p * n_items + i]` = outcome of person `p` on item `i`.
    outcomes:  Vec<u8>,
}

impl ResponseUniverse {
    /// Build from an unordered record list, validating that every
    /// (person, item) pair appears exactly once with a 0/1 outcome.
    pub fn from_records(
        records:   &[Response],
        n_persons: usize,
        n_items:   usize,
    ) -> CatResult<Self> {
        if records.len() != n_persons * n_items {
            return Err(CatError::DimensionMismatch {
                expected: n_persons * n_items,
                got:      records.len(),
                what:     "response universe records",
            });
        }
        // Sentinel 2 marks "not yet seen" — outcomes may only be 0 or 1.
        let mut outcomes = vec![2u8; n_persons * n_items];
        for r in records {
            if r.person.index() >= n_persons || r.item.index() >= n_items {
                return Err(CatError::Parse(format!(
                    "response ({}, {}) outside the {n_persons}×{n_items} grid",
                    r.person, r.item
                )));
            }
            if r.outcome > 1 {
                return Err(CatError::Parse(format!(
                    "outcome {} for ({}, {}) is not dichotomous",
                    r.outcome, r.person, r.item
                )));
            }
            let slot = &mut outcomes[r.person.index() * n_items + r.item.index()];
            if *slot != 2 {
                return Err(CatError::Parse(format!(
                    "duplicate response for ({}, {})",
                    r.person, r.item
                )));
            }
            *slot = r.outcome;
        }
        // records.len() == n_persons * n_items and no duplicates ⇒ full coverage.
        Ok(Self { n_persons, n_items, outcomes })
    }

    #[inline]
    pub fn n_persons(&self) -> usize {
        self.n_persons
    }

    #[inline]
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Pre-simulated outcome of `person` on `item`.
    #[inline]
    pub fn outcome(&self, person: PersonId, item: ItemId) -> u8 {
        self.outcomes[person.index() * self.n_items + item.index()]
    }

    /// The full record for one pair.
    #[inline]
    pub fn response(&self, person: PersonId, item: ItemId) -> Response {
        Response {
            person,
            item,
            outcome: self.outcome(person, item),
        }
    }

    /// All of one person's records in universe (item-id) order.
    pub fn records_for(&self, person: PersonId) -> impl Iterator<Item = Response> + '_ {
        (0..self.n_items as u32).map(move |i| self.response(person, ItemId(i)))
    }

    /// All records in universe order.
    pub fn iter(&self) -> impl Iterator<Item = Response> + '_ {
        (0..self.n_persons as u32)
            .flat_map(move |p| self.records_for(PersonId(p)))
    }
}

// ── ResponseSet ───────────────────────────────────────────────────────────────

/// The administered-response set: an insertion-ordered record list with an
/// O(1) membership index.
///
/// Records are never removed.  Two sets with the same records in different
/// insertion orders compare equal under [`same_records`][Self::same_records]
/// — the driver's fixed-point test — but not necessarily under iteration.
#[derive(Clone, Debug, Default)]
pub struct ResponseSet {
    records: Vec<Response>,
    index:   FxHashSet<(PersonId, ItemId)>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            records: Vec::with_capacity(n),
            index:   FxHashSet::default(),
        }
    }

    /// Insert a record, preserving administration order.
    ///
    /// Returns `false` (and changes nothing) if the pair is already present.
    pub fn insert(&mut self, response: Response) -> bool {
        if !self.index.insert((response.person, response.item)) {
            return false;
        }
        self.records.push(response);
        true
    }

    #[inline]
    pub fn contains(&self, person: PersonId, item: ItemId) -> bool {
        self.index.contains(&(person, item))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in administration order.
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.records.iter()
    }

    /// One person's records in administration order.
    pub fn records_for(&self, person: PersonId) -> impl Iterator<Item = &Response> {
        self.records.iter().filter(move |r| r.person == person)
    }

    /// Number of records administered to `person`.
    pub fn count_for(&self, person: PersonId) -> usize {
        self.records_for(person).count()
    }

    /// Item ids `person` has received, in administration order.
    pub fn items_for(&self, person: PersonId) -> impl Iterator<Item = ItemId> + '_ {
        self.records_for(person).map(|r| r.item)
    }

    /// `true` if every record of `other` is present in `self`.
    pub fn is_superset_of(&self, other: &ResponseSet) -> bool {
        other.index.iter().all(|key| self.index.contains(key))
    }

    /// Record-set equality, ignoring insertion order.
    pub fn same_records(&self, other: &ResponseSet) -> bool {
        self.index == other.index
    }
}
