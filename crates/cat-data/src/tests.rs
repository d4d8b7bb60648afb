//! Integration tests for the bundled data loaders.

use std::io::Cursor;

use cat_core::params::{DIFFICULTY, DISCRIMINATION, THETA};
use cat_core::{CatError, ItemId, PersonId};

use crate::csv::load_bundle_readers;
use crate::{DataLoader, SyntheticLoader};

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_loader {
    use super::*;

    const PERSONS: &str = "person_id,theta\n1,0.5\n2,-1.0\n";
    const ITEMS: &str = "item,b,a\n1,-0.5,1.2\n2,0.8,0.9\n";
    const RESPONSES: &str = "person_id,item,outcome\n1,1,1\n1,2,0\n2,1,0\n2,2,1\n";

    fn load(persons: &str, items: &str, responses: &str) -> Result<crate::Bundle, CatError> {
        load_bundle_readers(Cursor::new(persons), Cursor::new(items), Cursor::new(responses))
    }

    #[test]
    fn loads_a_consistent_bundle() {
        let bundle = load(PERSONS, ITEMS, RESPONSES).unwrap();
        assert_eq!(bundle.n_persons(), 2);
        assert_eq!(bundle.n_items(), 2);
        assert_eq!(bundle.person_truth.value(THETA, 0).unwrap(), 0.5);
        assert_eq!(bundle.item_truth.value(DIFFICULTY, 1).unwrap(), 0.8);
        assert_eq!(bundle.item_truth.value(DISCRIMINATION, 0).unwrap(), 1.2);
        assert_eq!(bundle.universe.outcome(PersonId(0), ItemId(0)), 1);
        assert_eq!(bundle.universe.outcome(PersonId(1), ItemId(0)), 0);
    }

    #[test]
    fn file_order_does_not_matter() {
        let shuffled_persons = "person_id,theta\n2,-1.0\n1,0.5\n";
        let bundle = load(shuffled_persons, ITEMS, RESPONSES).unwrap();
        assert_eq!(bundle.person_truth.value(THETA, 0).unwrap(), 0.5);
    }

    #[test]
    fn discrimination_column_is_optional() {
        let one_pl = "item,b\n1,-0.5\n2,0.8\n";
        let bundle = load(PERSONS, one_pl, RESPONSES).unwrap();
        assert!(!bundle.item_truth.has_column(DISCRIMINATION));
    }

    #[test]
    fn zero_based_id_is_rejected() {
        let bad = "person_id,theta\n0,0.5\n2,-1.0\n";
        assert!(matches!(load(bad, ITEMS, RESPONSES), Err(CatError::Parse(_))));
    }

    #[test]
    fn duplicate_person_is_rejected() {
        let bad = "person_id,theta\n1,0.5\n1,-1.0\n";
        assert!(matches!(load(bad, ITEMS, RESPONSES), Err(CatError::Parse(_))));
    }

    #[test]
    fn missing_response_pair_is_rejected() {
        let bad = "person_id,item,outcome\n1,1,1\n1,2,0\n2,1,0\n";
        assert!(matches!(
            load(PERSONS, ITEMS, bad),
            Err(CatError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn duplicate_response_pair_is_rejected() {
        let bad = "person_id,item,outcome\n1,1,1\n1,1,0\n2,1,0\n2,2,1\n";
        assert!(matches!(load(PERSONS, ITEMS, bad), Err(CatError::Parse(_))));
    }

    #[test]
    fn non_dichotomous_outcome_is_rejected() {
        let bad = "person_id,item,outcome\n1,1,2\n1,2,0\n2,1,0\n2,2,1\n";
        assert!(matches!(load(PERSONS, ITEMS, bad), Err(CatError::Parse(_))));
    }

    #[test]
    fn partial_discrimination_column_is_rejected() {
        let bad = "item,b,a\n1,-0.5,1.2\n2,0.8,\n";
        assert!(matches!(load(PERSONS, bad, RESPONSES), Err(CatError::Parse(_))));
    }
}

// ── Synthetic loader ──────────────────────────────────────────────────────────

#[cfg(test)]
mod synthetic {
    use super::*;

    #[test]
    fn same_seed_same_bundle() {
        let a = SyntheticLoader::new(5, 8, 42).load().unwrap();
        let b = SyntheticLoader::new(5, 8, 42).load().unwrap();
        assert_eq!(a.person_truth, b.person_truth);
        assert_eq!(a.item_truth, b.item_truth);
        for p in 0..5u32 {
            for i in 0..8u32 {
                assert_eq!(
                    a.universe.outcome(PersonId(p), ItemId(i)),
                    b.universe.outcome(PersonId(p), ItemId(i))
                );
            }
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = SyntheticLoader::new(20, 20, 1).load().unwrap();
        let b = SyntheticLoader::new(20, 20, 2).load().unwrap();
        assert_ne!(a.person_truth, b.person_truth);
    }

    #[test]
    fn one_pl_pool_has_no_discrimination_column() {
        let bundle = SyntheticLoader::new(3, 3, 7).load().unwrap();
        assert!(!bundle.item_truth.has_column(DISCRIMINATION));
        let two_pl = SyntheticLoader { discrimination: 1.5, ..SyntheticLoader::new(3, 3, 7) };
        assert!(two_pl.load().unwrap().item_truth.has_column(DISCRIMINATION));
    }

    #[test]
    fn empty_population_is_a_config_error() {
        assert!(matches!(
            SyntheticLoader::new(0, 4, 1).load(),
            Err(CatError::Config(_))
        ));
    }

    #[test]
    fn higher_ability_scores_more_correct() {
        // Not a statistical test — with 200 items per person and truths a
        // standard normal apart, the ordering is effectively certain.
        let bundle = SyntheticLoader::new(30, 200, 99).load().unwrap();
        let theta = bundle.person_truth.column(THETA).unwrap();
        let best = theta
            .iter()
            .enumerate()
            .max_by(|x, y| x.1.total_cmp(y.1))
            .map(|(p, _)| p)
            .unwrap();
        let worst = theta
            .iter()
            .enumerate()
            .min_by(|x, y| x.1.total_cmp(y.1))
            .map(|(p, _)| p)
            .unwrap();
        let score = |p: usize| -> u32 {
            (0..200u32)
                .map(|i| bundle.universe.outcome(PersonId(p as u32), ItemId(i)) as u32)
                .sum()
        };
        assert!(score(best) > score(worst));
    }
}
