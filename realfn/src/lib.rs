//! Real functions that know where they are defined.
//!
//! A [`RealFunc`] pairs an evaluation rule with a domain [`Set`]. The only
//! way to evaluate a function is [`RealFunc::safe_eval`], which checks the
//! domain first and reports a [`DomainError`] instead of computing a value
//! outside of it.
//!
//! Functions combine into sums, products and compositions. A combinator owns
//! clones of its operands and derives its domain from theirs: the domain of a
//! sum or product is the intersection of the operand domains, and the domain
//! of a composition `f(g(x))` is every `x` where `g` is defined and `f` is
//! defined at `g(x)`.
//!
//! ```
//! use realfn::RealFunc;
//!
//! let f = RealFunc::log() + RealFunc::sin();
//! assert!(f.safe_eval(1.0).is_ok());
//! assert!(f.safe_eval(-1.0).is_err());
//! ```
mod error;
mod func;
mod policy;
mod set;

pub use error::{DomainError, Result};
pub use func::{builtin, builtin_names, RealFunc, Rule};
pub use policy::{DomainPolicy, DomainPolicyBuilder, DEFAULT_TAN_TOLERANCE};
pub use set::Set;

pub use realfn_sequence::{IndexError, OwningGrid, OwningSequence};
