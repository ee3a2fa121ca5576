use realfn_sequence::OwningSequence;

use super::core::RealFunc;
use crate::error::Result;

impl RealFunc {
    /// Sum every function in `funcs`, left to right.
    ///
    /// The functions are cloned. Returns `None` when `funcs` is empty.
    pub fn sum_all(funcs: &OwningSequence<RealFunc>) -> Option<RealFunc> {
        let mut funcs = funcs.iter().cloned();
        let first = funcs.next()?;
        Some(funcs.fold(first, RealFunc::sum))
    }

    /// Multiply every function in `funcs`, left to right.
    pub fn product_all(funcs: &OwningSequence<RealFunc>) -> Option<RealFunc> {
        let mut funcs = funcs.iter().cloned();
        let first = funcs.next()?;
        Some(funcs.fold(first, RealFunc::product))
    }

    /// Evaluate the function at every input, in order.
    ///
    /// Stops at the first input outside of the domain; no partial result is
    /// returned.
    pub fn eval_all(&self, inputs: &OwningSequence<f64>) -> Result<OwningSequence<f64>> {
        inputs.iter().map(|&x| self.safe_eval(x)).collect()
    }
}
