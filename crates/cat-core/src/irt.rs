//! Logistic item-response model primitives.
//!
//! Everything downstream (information-based selection, likelihood-based
//! updates, synthetic data generation) is expressed in terms of the
//! two-parameter logistic model
//!
//!   P(correct | θ, a, b) = 1 / (1 + exp(-a·(θ - b)))
//!
//! with discrimination `a` and difficulty `b`.  The one-parameter model is
//! the special case `a = 1`.

/// Standard logistic function, `1 / (1 + e^{-z})`.
#[inline]
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// `ln(logistic(z))`, computed without overflow for large negative `z`.
#[inline]
pub fn log_logistic(z: f64) -> f64 {
    if z >= 0.0 {
        -(-z).exp().ln_1p()
    } else {
        z - z.exp().ln_1p()
    }
}

/// 2PL probability of a correct response.
#[inline]
pub fn prob_2pl(theta: f64, a: f64, b: f64) -> f64 {
    logistic(a * (theta - b))
}

/// 2PL Fisher information of one item at ability `theta`:
/// `I = a² · P · (1 - P)`.
#[inline]
pub fn fisher_info_2pl(theta: f64, a: f64, b: f64) -> f64 {
    let p = prob_2pl(theta, a, b);
    a * a * p * (1.0 - p)
}

/// Bernoulli log-likelihood of a set of dichotomous responses at `theta`.
///
/// `items` yields `(a, b, outcome)` per administered response.
pub fn log_likelihood_2pl<I>(theta: f64, items: I) -> f64
where
    I: IntoIterator<Item = (f64, f64, u8)>,
{
    let mut ll = 0.0;
    for (a, b, outcome) in items {
        let z = a * (theta - b);
        ll += if outcome == 1 {
            log_logistic(z)
        } else {
            log_logistic(-z)
        };
    }
    ll
}
