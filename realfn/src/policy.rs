use tracing::warn;

use crate::func::{RealFunc, Rule};
use crate::set::Set;

/// Tolerance around the poles of `tan` used when nothing else is configured.
pub const DEFAULT_TAN_TOLERANCE: f64 = 1e-10;

/// Floating point policy for domains that cannot be checked exactly.
///
/// Create one through [`DomainPolicy::builder`], or use the default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainPolicy {
    tan_tolerance: f64,
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self {
            tan_tolerance: DEFAULT_TAN_TOLERANCE,
        }
    }
}

impl DomainPolicy {
    pub fn builder() -> DomainPolicyBuilder {
        DomainPolicyBuilder::default()
    }

    /// How close to an odd multiple of π/2 an input may get before `tan`
    /// rejects it.
    pub fn tan_tolerance(&self) -> f64 {
        self.tan_tolerance
    }

    pub fn tan_domain(&self) -> Set {
        Set::tan_domain(self.tan_tolerance)
    }

    /// A `tan` function whose domain follows this policy.
    pub fn tan(&self) -> RealFunc {
        RealFunc::new("tan", self.tan_domain(), Rule::Tan)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DomainPolicyBuilder {
    tan_tolerance: Option<f64>,
}

impl DomainPolicyBuilder {
    /// Set the tolerance around the poles of `tan`.
    ///
    /// Negative or non-finite values are ignored in favor of
    /// [`DEFAULT_TAN_TOLERANCE`] when the policy is built.
    ///
    /// Calling this multiple times will override the tolerance.
    pub fn tan_tolerance(&mut self, tolerance: f64) -> &mut Self {
        self.tan_tolerance = Some(tolerance);
        self
    }

    /// Build the policy.
    pub fn build(&self) -> DomainPolicy {
        let tan_tolerance = match self.tan_tolerance {
            Some(tolerance) if tolerance.is_finite() && tolerance >= 0.0 => tolerance,
            Some(tolerance) => {
                warn!(tolerance, "invalid tan tolerance, using the default");
                DEFAULT_TAN_TOLERANCE
            }
            None => DEFAULT_TAN_TOLERANCE,
        };
        DomainPolicy { tan_tolerance }
    }
}
