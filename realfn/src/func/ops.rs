// Operator sugar over the combinators. Owned operands move into the new
// function; borrowed operands are cloned.
use std::ops::{Add, Mul, Shr};

use super::core::RealFunc;

impl Add for RealFunc {
    type Output = RealFunc;

    fn add(self, rhs: RealFunc) -> RealFunc {
        RealFunc::sum(self, rhs)
    }
}

impl Add for &RealFunc {
    type Output = RealFunc;

    fn add(self, rhs: Self) -> RealFunc {
        RealFunc::sum(self.clone(), rhs.clone())
    }
}

impl Mul for RealFunc {
    type Output = RealFunc;

    fn mul(self, rhs: RealFunc) -> RealFunc {
        RealFunc::product(self, rhs)
    }
}

impl Mul for &RealFunc {
    type Output = RealFunc;

    fn mul(self, rhs: Self) -> RealFunc {
        RealFunc::product(self.clone(), rhs.clone())
    }
}

/// Pipeline composition: `(f >> g)(x)` is `g(f(x))`.
impl Shr for RealFunc {
    type Output = RealFunc;

    fn shr(self, rhs: RealFunc) -> RealFunc {
        RealFunc::compose(rhs, self)
    }
}

impl Shr for &RealFunc {
    type Output = RealFunc;

    fn shr(self, rhs: Self) -> RealFunc {
        RealFunc::compose(rhs.clone(), self.clone())
    }
}
