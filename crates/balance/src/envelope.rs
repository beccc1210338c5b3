//! Certified loading envelope: which (weight, CG) points are safe to fly.

use crate::airframe::ForwardLimitTable;

/// Weight range, fixed aft limit, and weight-dependent forward limit.
///
/// All boundaries are inclusive: a point on the line is inside.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    min_weight_lb: f64,
    max_weight_lb: f64,
    aft_limit_in: f64,
    forward_limits: &'a ForwardLimitTable,
}

impl<'a> Envelope<'a> {
    pub fn new(
        min_weight_lb: f64,
        max_weight_lb: f64,
        aft_limit_in: f64,
        forward_limits: &'a ForwardLimitTable,
    ) -> Self {
        Self {
            min_weight_lb,
            max_weight_lb,
            aft_limit_in,
            forward_limits,
        }
    }

    /// Forward CG limit in inches at the given weight.
    pub fn forward_limit(&self, weight_lb: f64) -> f64 {
        self.forward_limits.limit_at(weight_lb)
    }

    pub fn aft_limit(&self) -> f64 {
        self.aft_limit_in
    }

    /// Whether the point lies inside the envelope. Non-finite input is never inside.
    pub fn contains(&self, weight_lb: f64, cg_in: f64) -> bool {
        if !weight_lb.is_finite() || !cg_in.is_finite() {
            return false;
        }
        if weight_lb < self.min_weight_lb || weight_lb > self.max_weight_lb {
            return false;
        }
        if cg_in > self.aft_limit_in {
            return false;
        }
        cg_in >= self.forward_limit(weight_lb)
    }
}
