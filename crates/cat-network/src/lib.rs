//! `cat-network` — the co-exposure graph and item-to-item distances.
//!
//! Network-based selection treats the item pool as a weighted graph: an edge
//! joins every item pair that has been co-administered, with a weight that
//! shrinks as the pair's co-exposure count grows.  Under all-pairs shortest
//! paths, heavily co-exposed items end up "close" and rarely paired items
//! "far" — max-distance selection then administers the farthest candidates.
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`weight`]   | `EdgeWeight` — monotone count → weight transforms  |
//! | [`distance`] | `DistanceMatrix` — all-pairs shortest-path table   |

pub mod distance;
pub mod weight;

#[cfg(test)]
mod tests;

pub use distance::DistanceMatrix;
pub use weight::EdgeWeight;
