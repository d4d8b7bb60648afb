//! Count → edge-weight transforms.
//!
//! Every transform is strictly decreasing in the co-exposure count, so a
//! heavily co-administered pair always sits closer in the graph than a
//! rarely paired one regardless of which transform a run uses.  The choice
//! of transform only controls how steeply high counts are penalized.

/// Floor applied to every computed weight.
///
/// The shortest-path primitive requires strictly positive edge costs; the
/// neg-log and linear transforms can otherwise reach zero or go negative
/// for large counts.
pub const MIN_EDGE_WEIGHT: f64 = 1e-9;

/// A monotone transform from co-exposure count to graph edge weight.
///
/// A count of zero means "never co-administered" and produces no edge at
/// all rather than a weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeWeight {
    /// `1 / (count + smoothing)`.  The classic transform; `smoothing = 0`
    /// gives the plain reciprocal used by un-enhanced max-distance.
    Inverse { smoothing: f64 },
    /// `ln((count + scale) / count)` — a softened reciprocal that compresses
    /// differences between already-large counts.
    NegLog { scale: f64 },
    /// `1 - count / scale`, clamped at the weight floor once `count >= scale`.
    Linear { scale: f64 },
    /// `count^(-exponent)`.
    Power { exponent: f64 },
    /// `exp(-count / rate)`.
    Exponential { rate: f64 },
}

impl EdgeWeight {
    /// The plain-reciprocal default (`1 / count`).
    pub fn inverse() -> Self {
        EdgeWeight::Inverse { smoothing: 0.0 }
    }

    /// Weight of an edge with the given co-exposure count, or `None` when
    /// `count == 0` (no edge).
    pub fn weight(&self, count: u32) -> Option<f64> {
        if count == 0 {
            return None;
        }
        let c = count as f64;
        let raw = match *self {
            EdgeWeight::Inverse { smoothing } => 1.0 / (c + smoothing),
            EdgeWeight::NegLog { scale } => ((c + scale) / c).ln(),
            EdgeWeight::Linear { scale } => 1.0 - c / scale,
            EdgeWeight::Power { exponent } => c.powf(-exponent),
            EdgeWeight::Exponential { rate } => (-c / rate).exp(),
        };
        Some(raw.max(MIN_EDGE_WEIGHT))
    }
}

impl Default for EdgeWeight {
    fn default() -> Self {
        EdgeWeight::inverse()
    }
}
