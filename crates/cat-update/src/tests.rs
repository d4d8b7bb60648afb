//! Integration tests for the update strategies.

use cat_core::irt::logistic;
use cat_core::params::{DIFFICULTY, THETA};
use cat_core::{ItemId, ParamTable, PersonId, Response, ResponseSet};

use crate::{BoundedMle, EloGradient, PairedGradient, ParameterUpdater};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn persons(thetas: &[f64]) -> ParamTable {
    ParamTable::new(thetas.len())
        .with_column(THETA, thetas.to_vec())
        .unwrap()
}

fn items(difficulties: &[f64]) -> ParamTable {
    ParamTable::new(difficulties.len())
        .with_column(DIFFICULTY, difficulties.to_vec())
        .unwrap()
}

fn respond(set: &mut ResponseSet, p: u32, i: u32, outcome: u8) {
    set.insert(Response {
        person: PersonId(p),
        item:   ItemId(i),
        outcome,
    });
}

// ── Bounded MLE ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod mle {
    use super::*;

    #[test]
    fn all_correct_hits_upper_bound() {
        // Perfect response patterns have no interior maximum; the bounded
        // search must settle at the top of the interval.
        let mut set = ResponseSet::new();
        for i in 0..4 {
            respond(&mut set, 0, i, 1);
        }
        let out = BoundedMle::new()
            .update(&persons(&[0.0]), &items(&[0.0; 4]), &set)
            .unwrap();
        let theta = out.persons.value(THETA, 0).unwrap();
        assert!((theta - 4.0).abs() < 1e-3, "got {theta}");
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn mixed_pattern_recovers_interior_maximum() {
        // Items at b = -1, 0, 1; correct on the easy two, wrong on the hard
        // one.  The 1PL MLE solves Σ P(θ, b_i) = 2, which lands near 0.73.
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        respond(&mut set, 0, 1, 1);
        respond(&mut set, 0, 2, 0);
        let out = BoundedMle::new()
            .update(&persons(&[0.0]), &items(&[-1.0, 0.0, 1.0]), &set)
            .unwrap();
        let theta = out.persons.value(THETA, 0).unwrap();
        let expected_total: f64 = [-1.0, 0.0, 1.0]
            .iter()
            .map(|b| logistic(theta - b))
            .sum();
        assert!((expected_total - 2.0).abs() < 1e-3, "score equation off: {expected_total}");
    }

    #[test]
    fn items_are_left_untouched() {
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        let item_table = items(&[0.3, -0.7]);
        let out = BoundedMle::new()
            .update(&persons(&[0.0]), &item_table, &set)
            .unwrap();
        assert_eq!(out.items, item_table);
    }

    #[test]
    fn person_without_responses_keeps_estimate() {
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        let out = BoundedMle::new()
            .update(&persons(&[0.0, 1.25]), &items(&[0.0; 2]), &set)
            .unwrap();
        assert_eq!(out.persons.value(THETA, 1).unwrap(), 1.25);
    }

    #[test]
    fn exhausted_iteration_budget_warns_and_keeps_previous() {
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        let strict = BoundedMle {
            bounds:   (-4.0, 4.0),
            tol:      1e-12,
            max_iter: 2, // cannot shrink an 8-wide bracket in 2 steps
        };
        let out = strict
            .update(&persons(&[0.5]), &items(&[0.0]), &set)
            .unwrap();
        assert_eq!(out.persons.value(THETA, 0).unwrap(), 0.5);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn respects_discrimination_column() {
        use cat_core::params::DISCRIMINATION;
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        respond(&mut set, 0, 1, 0);
        let item_table = items(&[-1.0, 1.0])
            .with_column(DISCRIMINATION, vec![2.0, 2.0])
            .unwrap();
        let out = BoundedMle::new()
            .update(&persons(&[0.0]), &item_table, &set)
            .unwrap();
        // Steeper items sharpen the likelihood around the midpoint of the
        // two difficulties; the maximum stays near zero.
        let theta = out.persons.value(THETA, 0).unwrap();
        assert!(theta.abs() < 0.2, "got {theta}");
    }
}

// ── Elo gradient ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod elo {
    use super::*;

    #[test]
    fn correct_answer_moves_theta_up_and_difficulty_down() {
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        let out = EloGradient::new(0.4, 0.3)
            .update(&persons(&[0.0]), &items(&[0.0]), &set)
            .unwrap();
        // Residual = 1 − 0.5 = 0.5.
        assert!((out.persons.value(THETA, 0).unwrap() - 0.2).abs() < 1e-12);
        assert!((out.items.value(DIFFICULTY, 0).unwrap() + 0.15).abs() < 1e-12);
    }

    #[test]
    fn updates_use_one_expectation_snapshot() {
        // Two records for one person.  If the item step chained off the
        // already-moved theta, the second residual would differ; with one
        // snapshot both residuals are 0.5 exactly.
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        respond(&mut set, 0, 1, 1);
        let out = EloGradient::new(0.4, 0.3)
            .update(&persons(&[0.0]), &items(&[0.0, 0.0]), &set)
            .unwrap();
        assert!((out.persons.value(THETA, 0).unwrap() - 0.4).abs() < 1e-12);
        for i in 0..2 {
            assert!((out.items.value(DIFFICULTY, i).unwrap() + 0.15).abs() < 1e-12);
        }
    }

    #[test]
    fn balanced_outcomes_cancel() {
        // Two persons at the same theta answer the same item oppositely:
        // the item's residuals cancel exactly.
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        respond(&mut set, 1, 0, 0);
        let out = EloGradient::new(0.4, 0.3)
            .update(&persons(&[0.0, 0.0]), &items(&[0.0]), &set)
            .unwrap();
        assert_eq!(out.items.value(DIFFICULTY, 0).unwrap(), 0.0);
    }
}

// ── Paired gradient ───────────────────────────────────────────────────────────

#[cfg(test)]
mod paired {
    use super::*;

    #[test]
    fn theta_update_matches_elo() {
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        respond(&mut set, 0, 1, 0);
        let p = persons(&[0.3]);
        let i = items(&[-0.5, 0.8]);
        let elo = EloGradient::new(0.4, 0.3).update(&p, &i, &set).unwrap();
        let paired = PairedGradient::new(0.4, 0.3).update(&p, &i, &set).unwrap();
        assert_eq!(
            elo.persons.value(THETA, 0).unwrap(),
            paired.persons.value(THETA, 0).unwrap()
        );
    }

    #[test]
    fn per_person_difficulty_contribution_sums_to_zero() {
        // One person, five records in a fixed administration order with
        // mixed outcomes: the net difficulty movement must vanish.
        let mut set = ResponseSet::new();
        for (i, outcome) in [(0, 1), (1, 0), (2, 1), (3, 1), (4, 0)] {
            respond(&mut set, 0, i, outcome);
        }
        let before = items(&[-1.0, -0.5, 0.0, 0.5, 1.0]);
        let out = PairedGradient::new(0.4, 0.3)
            .update(&persons(&[0.2]), &before, &set)
            .unwrap();
        let total: f64 = (0..5)
            .map(|i| out.items.value(DIFFICULTY, i).unwrap() - before.value(DIFFICULTY, i).unwrap())
            .sum();
        assert!(total.abs() < 1e-12, "difficulty drift {total}");
    }

    #[test]
    fn many_persons_still_sum_to_zero() {
        let mut set = ResponseSet::new();
        for p in 0..6u32 {
            for i in 0..4u32 {
                respond(&mut set, p, i, ((p + i) % 2) as u8);
            }
        }
        let before = items(&[0.0, 0.4, -0.4, 1.2]);
        let out = PairedGradient::new(0.4, 0.3)
            .update(&persons(&[0.0, 0.5, -0.5, 1.0, -1.0, 0.25]), &before, &set)
            .unwrap();
        let total: f64 = (0..4)
            .map(|i| out.items.value(DIFFICULTY, i).unwrap() - before.value(DIFFICULTY, i).unwrap())
            .sum();
        assert!(total.abs() < 1e-9, "difficulty drift {total}");
    }

    #[test]
    fn single_response_moves_no_difficulty() {
        // One record → no consecutive pair → the item side is untouched.
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 1, 1);
        let before = items(&[0.0, 0.7]);
        let out = PairedGradient::new(0.4, 0.3)
            .update(&persons(&[0.0]), &before, &set)
            .unwrap();
        assert_eq!(out.items, before);
    }

    #[test]
    fn kappa_magnitude_for_one_pair() {
        // θ = 0, both items at b = 0: residuals are ±0.5, so
        // κ = ½ · 0.3 · (−0.5 − 0.5) = −0.15.
        let mut set = ResponseSet::new();
        respond(&mut set, 0, 0, 1);
        respond(&mut set, 0, 1, 0);
        let out = PairedGradient::new(0.4, 0.3)
            .update(&persons(&[0.0]), &items(&[0.0, 0.0]), &set)
            .unwrap();
        assert!((out.items.value(DIFFICULTY, 1).unwrap() + 0.15).abs() < 1e-12);
        assert!((out.items.value(DIFFICULTY, 0).unwrap() - 0.15).abs() < 1e-12);
    }
}
