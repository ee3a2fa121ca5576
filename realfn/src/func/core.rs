use std::sync::Arc;

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::error::{DomainError, Result};
use crate::policy::DomainPolicy;
use crate::set::Set;

/// A real-valued function of one real variable with an explicit domain.
///
/// A function owns its domain and, for combinators, its operands. Functions
/// are immutable, so operands and domains are shared through [`Arc`] rather
/// than copied: a composition holds its inner function once, and a sum's
/// domain reuses its operands' domains. A clone stays usable no matter what
/// happens to the original, and building a function from `n` others costs
/// `O(n)` nodes however deeply they nest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RealFunc {
    name: String,
    domain: Arc<Set>,
    rule: Rule,
}

/// How a [`RealFunc`] computes its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rule {
    Exp,
    Log,
    Sin,
    Tan,
    Pow(OrderedFloat<f64>),
    Sum(Arc<RealFunc>, Arc<RealFunc>),
    Product(Arc<RealFunc>, Arc<RealFunc>),
    /// `outer(inner(x))`
    Compose {
        outer: Arc<RealFunc>,
        inner: Arc<RealFunc>,
    },
}

impl RealFunc {
    pub(crate) fn new(name: impl Into<String>, domain: Set, rule: Rule) -> Self {
        Self {
            name: name.into(),
            domain: Arc::new(domain),
            rule,
        }
    }

    /// `e^x`, defined everywhere.
    pub fn exp() -> Self {
        Self::new("exp", Set::AllReals, Rule::Exp)
    }

    /// The natural logarithm, defined for positive inputs.
    pub fn log() -> Self {
        Self::new("log", Set::Positives, Rule::Log)
    }

    pub fn sin() -> Self {
        Self::new("sin", Set::AllReals, Rule::Sin)
    }

    /// `tan` with the default pole tolerance.
    ///
    /// Use [`DomainPolicy::tan`] to pick a different tolerance.
    pub fn tan() -> Self {
        DomainPolicy::default().tan()
    }

    /// `x^exponent`, defined for positive inputs.
    pub fn pow(exponent: f64) -> Self {
        Self::new(
            format!("pow({exponent})"),
            Set::Positives,
            Rule::Pow(OrderedFloat(exponent)),
        )
    }

    /// `f(x) + g(x)`, defined where both operands are.
    pub fn sum(f: RealFunc, g: RealFunc) -> Self {
        Self {
            name: format!("({} + {})", f.name, g.name),
            domain: Arc::new(Set::Intersect(f.domain.clone(), g.domain.clone())),
            rule: Rule::Sum(Arc::new(f), Arc::new(g)),
        }
    }

    /// `f(x) * g(x)`, defined where both operands are.
    pub fn product(f: RealFunc, g: RealFunc) -> Self {
        Self {
            name: format!("({} * {})", f.name, g.name),
            domain: Arc::new(Set::Intersect(f.domain.clone(), g.domain.clone())),
            rule: Rule::Product(Arc::new(f), Arc::new(g)),
        }
    }

    /// `outer(inner(x))`, defined where `inner` is defined and `outer` is
    /// defined at the result.
    pub fn compose(outer: RealFunc, inner: RealFunc) -> Self {
        let inner = Arc::new(inner);
        Self {
            name: format!("{}({})", outer.name, inner.name),
            domain: Arc::new(Set::PushThrough {
                inner: inner.clone(),
                outer: outer.domain.clone(),
            }),
            rule: Rule::Compose {
                outer: Arc::new(outer),
                inner,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &Set {
        &self.domain
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Evaluate the function at `x`.
    ///
    /// Nothing is computed when `x` is outside of the domain; the error names
    /// this function and carries the rejected input.
    pub fn safe_eval(&self, x: f64) -> Result<f64> {
        self.evaluate(x).ok_or_else(|| {
            debug!(function = %self.name, input = x, "input outside of domain");
            DomainError {
                name: self.name.clone(),
                input: x,
            }
        })
    }

    // None exactly when domain().check(x) is false. Leaves consult their
    // domain before computing; a combinator's domain is made of its operands'
    // domains, so it is decided while evaluating each operand once.
    pub(crate) fn evaluate(&self, x: f64) -> Option<f64> {
        match &self.rule {
            Rule::Sum(f, g) => Some(f.evaluate(x)? + g.evaluate(x)?),
            Rule::Product(f, g) => Some(f.evaluate(x)? * g.evaluate(x)?),
            Rule::Compose { outer, inner } => outer.evaluate(inner.evaluate(x)?),
            Rule::Exp => self.leaf(x, f64::exp),
            Rule::Log => self.leaf(x, f64::ln),
            Rule::Sin => self.leaf(x, f64::sin),
            Rule::Tan => self.leaf(x, f64::tan),
            Rule::Pow(exponent) => self.leaf(x, |x| x.powf(exponent.0)),
        }
    }

    fn leaf(&self, x: f64, rule: impl FnOnce(f64) -> f64) -> Option<f64> {
        self.domain.check(x).then(|| rule(x))
    }
}
