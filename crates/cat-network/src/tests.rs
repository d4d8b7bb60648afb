//! Unit tests for edge weighting and the distance matrix.

use cat_core::{ItemId, PersonId, Response, ResponseSet};
use cat_exposure::ExposureMatrix;

use crate::weight::MIN_EDGE_WEIGHT;
use crate::{DistanceMatrix, EdgeWeight};

fn administer(set: &mut ResponseSet, p: u32, items: &[u32]) {
    for &i in items {
        set.insert(Response {
            person:  PersonId(p),
            item:    ItemId(i),
            outcome: 1,
        });
    }
}

#[cfg(test)]
mod weights {
    use super::*;

    #[test]
    fn zero_count_means_no_edge() {
        for w in [
            EdgeWeight::inverse(),
            EdgeWeight::NegLog { scale: 2.0 },
            EdgeWeight::Linear { scale: 10.0 },
            EdgeWeight::Power { exponent: 2.0 },
            EdgeWeight::Exponential { rate: 3.0 },
        ] {
            assert_eq!(w.weight(0), None, "{w:?}");
        }
    }

    #[test]
    fn all_transforms_decrease_with_count() {
        for w in [
            EdgeWeight::Inverse { smoothing: 1.0 },
            EdgeWeight::NegLog { scale: 2.0 },
            EdgeWeight::Linear { scale: 100.0 },
            EdgeWeight::Power { exponent: 0.5 },
            EdgeWeight::Exponential { rate: 3.0 },
        ] {
            let low = w.weight(1).unwrap();
            let high = w.weight(50).unwrap();
            assert!(high < low, "{w:?}: weight(50)={high} !< weight(1)={low}");
        }
    }

    #[test]
    fn inverse_is_plain_reciprocal() {
        let w = EdgeWeight::inverse();
        assert!((w.weight(4).unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn linear_clamps_at_floor() {
        let w = EdgeWeight::Linear { scale: 5.0 };
        assert_eq!(w.weight(10).unwrap(), MIN_EDGE_WEIGHT);
    }
}

#[cfg(test)]
mod distances {
    use super::*;

    /// Chain exposure: items 0-1 paired twice, 1-2 paired once, 0-2 never.
    fn chain_matrix() -> ExposureMatrix {
        let mut set = ResponseSet::new();
        administer(&mut set, 0, &[0, 1]);
        administer(&mut set, 1, &[0, 1]);
        administer(&mut set, 2, &[1, 2]);
        ExposureMatrix::build(&set, 3, 3)
    }

    #[test]
    fn direct_edge_distance_is_weight() {
        let d = DistanceMatrix::build(&chain_matrix(), &EdgeWeight::inverse()).unwrap();
        // count(0,1) = 2 → weight 0.5.
        assert!((d.distance(ItemId(0), ItemId(1)) - 0.5).abs() < 1e-12);
        assert!((d.distance(ItemId(1), ItemId(2)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn path_through_intermediate_item() {
        let d = DistanceMatrix::build(&chain_matrix(), &EdgeWeight::inverse()).unwrap();
        // 0-2 has no direct edge; the path runs through item 1: 0.5 + 1.0.
        assert!((d.distance(ItemId(0), ItemId(2)) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let d = DistanceMatrix::build(&chain_matrix(), &EdgeWeight::inverse()).unwrap();
        for i in 0..3u32 {
            for j in 0..3u32 {
                assert_eq!(d.distance(ItemId(i), ItemId(j)), d.distance(ItemId(j), ItemId(i)));
            }
        }
    }

    #[test]
    fn disconnected_item_is_infinitely_far() {
        // Item 2 never administered with anything.
        let mut set = ResponseSet::new();
        administer(&mut set, 0, &[0, 1]);
        let d = DistanceMatrix::build(&ExposureMatrix::build(&set, 1, 3), &EdgeWeight::inverse())
            .unwrap();
        assert!(d.distance(ItemId(0), ItemId(2)).is_infinite());
        assert!(d.distance(ItemId(0), ItemId(1)).is_finite());
    }

    #[test]
    fn min_distance_over_administered_set() {
        let d = DistanceMatrix::build(&chain_matrix(), &EdgeWeight::inverse()).unwrap();
        let min = d.min_distance_to(ItemId(2), [ItemId(0), ItemId(1)]);
        // Item 1 is the closer administered item (distance 1.0 vs 1.5).
        assert!((min - 1.0).abs() < 1e-12);
        assert!(d.min_distance_to(ItemId(2), []).is_infinite());
    }

    #[test]
    fn self_distance_is_zero() {
        let d = DistanceMatrix::build(&chain_matrix(), &EdgeWeight::inverse()).unwrap();
        assert_eq!(d.distance(ItemId(1), ItemId(1)), 0.0);
    }
}
