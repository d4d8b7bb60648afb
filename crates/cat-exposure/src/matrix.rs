//! Symmetric co-exposure count matrix.

use cat_core::{ItemId, PersonId, ResponseSet};

/// Symmetric M×M matrix of co-exposure counts, dense row-major.
///
/// Invariants (hold at every round boundary, checked by tests):
/// - symmetric: `a[i][j] == a[j][i]`,
/// - diagonal dominance: `a[i][i] >= a[i][j]` for every `j` — a person
///   exposed to the pair (i, j) was exposed to i and to j individually.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExposureMatrix {
    n_items: usize,
    counts:  Vec<u32>,
}

impl ExposureMatrix {
    /// The all-zero matrix for an `n_items` pool — the INIT-state matrix.
    pub fn zero(n_items: usize) -> Self {
        Self {
            n_items,
            counts: vec![0; n_items * n_items],
        }
    }

    /// Rebuild the full matrix from an administered set.
    ///
    /// Conceptually `A = indicatorᵗ · indicator` for the N×M 0/1 indicator
    /// matrix of administered (person, item) pairs; computed by accumulating
    /// each person's indicator row outer product, which never materializes
    /// the N×M matrix.
    pub fn build(administered: &ResponseSet, n_persons: usize, n_items: usize) -> Self {
        let mut matrix = Self::zero(n_items);
        let mut row = Vec::new();
        for p in 0..n_persons as u32 {
            row.clear();
            row.extend(administered.items_for(PersonId(p)));
            for (k, &i) in row.iter().enumerate() {
                matrix.counts[i.index() * n_items + i.index()] += 1;
                for &j in &row[k + 1..] {
                    matrix.counts[i.index() * n_items + j.index()] += 1;
                    matrix.counts[j.index() * n_items + i.index()] += 1;
                }
            }
        }
        matrix
    }

    #[inline]
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Co-exposure count of an item pair (or single-item exposure if `i == j`).
    #[inline]
    pub fn count(&self, i: ItemId, j: ItemId) -> u32 {
        self.counts[i.index() * self.n_items + j.index()]
    }

    /// Diagonal entry: how many persons have received `item`.
    #[inline]
    pub fn exposure(&self, item: ItemId) -> u32 {
        self.count(item, item)
    }

    /// `true` if the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n_items).all(|i| {
            (i + 1..self.n_items)
                .all(|j| self.counts[i * self.n_items + j] == self.counts[j * self.n_items + i])
        })
    }

    /// `true` if every diagonal entry bounds its row's off-diagonal entries.
    pub fn is_diagonally_dominant(&self) -> bool {
        (0..self.n_items).all(|i| {
            let diag = self.counts[i * self.n_items + i];
            (0..self.n_items).all(|j| self.counts[i * self.n_items + j] <= diag)
        })
    }
}
