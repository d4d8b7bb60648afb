//! All-pairs shortest-path distances between items.

use std::collections::HashMap;

use petgraph::algo::floyd_warshall;
use petgraph::graph::{NodeIndex, UnGraph};

use cat_core::{CatError, CatResult, ItemId};
use cat_exposure::ExposureMatrix;

use crate::EdgeWeight;

/// Dense M×M table of shortest-path distances over the weighted co-exposure
/// graph.  `f64::INFINITY` marks item pairs with no connecting path.
///
/// Rebuilt from the exposure matrix each time a network-based selector runs;
/// the matrix changes every round, so nothing here is worth caching across
/// rounds.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    n_items:   usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Build the distance table for `exposure` under the given transform.
    ///
    /// Only off-diagonal, non-zero counts become edges; the diagonal
    /// (single-item exposure) carries no pairing information.
    pub fn build(exposure: &ExposureMatrix, weight: &EdgeWeight) -> CatResult<Self> {
        let n_items = exposure.n_items();
        let mut graph: UnGraph<(), f64> = UnGraph::with_capacity(n_items, 0);
        // Nodes are added in item order, so NodeIndex k ↔ ItemId k.
        for _ in 0..n_items {
            graph.add_node(());
        }
        for i in 0..n_items {
            for j in (i + 1)..n_items {
                if let Some(w) = weight.weight(exposure.count(ItemId(i as u32), ItemId(j as u32))) {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), w);
                }
            }
        }

        // Unreachable with weights floored at MIN_EDGE_WEIGHT, but the
        // primitive's error is mapped rather than unwrapped.
        let paths: HashMap<(NodeIndex, NodeIndex), f64> =
            floyd_warshall(&graph, |edge| *edge.weight())
                .map_err(|_| CatError::Config("negative cycle in co-exposure graph".into()))?;

        let mut distances = vec![f64::INFINITY; n_items * n_items];
        for ((from, to), cost) in paths {
            // floyd_warshall reports unreachable pairs as the measure's
            // upper bound rather than infinity.
            if cost < f64::MAX / 2.0 {
                distances[from.index() * n_items + to.index()] = cost;
            }
        }
        Ok(Self { n_items, distances })
    }

    #[inline]
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Shortest-path distance between two items.
    #[inline]
    pub fn distance(&self, i: ItemId, j: ItemId) -> f64 {
        self.distances[i.index() * self.n_items + j.index()]
    }

    /// Minimum distance from `candidate` to any item in `administered`.
    ///
    /// Returns `f64::INFINITY` if the iterator is empty or no administered
    /// item reaches the candidate — an unreachable candidate is maximally
    /// attractive to max-distance selection.
    pub fn min_distance_to<I>(&self, candidate: ItemId, administered: I) -> f64
    where
        I: IntoIterator<Item = ItemId>,
    {
        administered
            .into_iter()
            .map(|item| self.distance(item, candidate))
            .fold(f64::INFINITY, f64::min)
    }
}
