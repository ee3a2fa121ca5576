use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::func::RealFunc;

/// A subset of the reals, observable only through [`Set::check`].
///
/// Only finite numbers are reals: no set contains NaN or an infinity.
///
/// Sets are immutable once built. Parts that a set shares with a function
/// (the operand domains of a sum, the inner function of a composition) are
/// held through [`Arc`], so a clone is independent of the original's
/// lifetime without copying the whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Set {
    AllReals,
    /// `x > 0`
    Positives,
    /// `x >= 0`
    NonNegatives,
    /// The open interval `(low, high)`. Empty when `low >= high`.
    Interval {
        low: OrderedFloat<f64>,
        high: OrderedFloat<f64>,
    },
    /// Members of both sets.
    Intersect(Arc<Set>, Arc<Set>),
    /// All reals except the poles of `tan`, the odd multiples of π/2.
    ///
    /// Floating point multiples of π are never exact, so anything within
    /// `tolerance` of a pole is excluded as well. Inputs are reduced modulo
    /// the `f64` approximation of π; once `|x|` is around `1e16` that
    /// approximation drifts by more than π from the true multiple, and the
    /// check no longer tracks the mathematical poles.
    TanDomain { tolerance: OrderedFloat<f64> },
    /// Every `x` where `inner` is defined and `outer` contains `inner(x)`.
    ///
    /// This is the domain of the composition `f(g(x))` with `outer` the
    /// domain of `f` and `inner` the function `g`.
    PushThrough {
        inner: Arc<RealFunc>,
        outer: Arc<Set>,
    },
}

impl Set {
    pub fn interval(low: f64, high: f64) -> Self {
        Set::Interval {
            low: OrderedFloat(low),
            high: OrderedFloat(high),
        }
    }

    pub fn intersect(a: Set, b: Set) -> Self {
        Set::Intersect(Arc::new(a), Arc::new(b))
    }

    pub fn tan_domain(tolerance: f64) -> Self {
        Set::TanDomain {
            tolerance: OrderedFloat(tolerance),
        }
    }

    /// The set of `x` for which `outer` contains `inner(x)`.
    pub fn push_through(inner: RealFunc, outer: Set) -> Self {
        Set::PushThrough {
            inner: Arc::new(inner),
            outer: Arc::new(outer),
        }
    }

    /// Test whether `x` is a member of the set.
    pub fn check(&self, x: f64) -> bool {
        match self {
            Set::AllReals => x.is_finite(),
            Set::Positives => x.is_finite() && x > 0.0,
            Set::NonNegatives => x.is_finite() && x >= 0.0,
            Set::Interval { low, high } => x.is_finite() && low.0 < x && x < high.0,
            // && short-circuits, so b is not consulted when a rejects x
            Set::Intersect(a, b) => a.check(x) && b.check(x),
            Set::TanDomain { tolerance } => distance_to_tan_pole(x) > tolerance.0,
            Set::PushThrough { inner, outer } => {
                trace!(function = %inner.name(), input = x, "pushing input through");
                matches!(inner.evaluate(x), Some(y) if outer.check(y))
            }
        }
    }
}

// distance from x to the nearest odd multiple of π/2; NaN for non-finite x
fn distance_to_tan_pole(x: f64) -> f64 {
    // every odd multiple of π/2 lands on π/2 once reduced into [0, π)
    (x.rem_euclid(PI) - FRAC_PI_2).abs()
}
