//! Adapter that exposes a [`Problem`] as an `argmin` problem.
//!
//! Lets a host application drive the same objective with `argmin` executors
//! (e.g. for the outer loop) while the core keeps its own `OptResult`
//! surface. Values, gradients, and Hessians are validated on the way out,
//! and crate errors are boxed into `argmin::core::Error`; they convert back
//! losslessly via `OptError::from`.
use crate::optimization::problem::{
    traits::Problem,
    types::{Cost, Grad, Hessian, Theta},
    validation::{validate_grad, validate_hessian, validate_value},
};
use argmin::core::{CostFunction, Error, Gradient, Hessian as ArgminHessian};

/// Bridges a user [`Problem`] to `argmin`'s `CostFunction`, `Gradient`,
/// and `Hessian` traits.
#[derive(Debug, Clone)]
pub struct ArgminAdapter<'a, P: Problem> {
    pub problem: &'a P,
}

impl<'a, P: Problem> ArgminAdapter<'a, P> {
    pub fn new(problem: &'a P) -> Self {
        Self { problem }
    }
}

impl<'a, P: Problem> CostFunction for ArgminAdapter<'a, P> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate `f(x)`, rejecting non-finite values with `NonFiniteCost`.
    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        let value = self.problem.value(x)?;
        validate_value(value)?;
        Ok(value)
    }
}

impl<'a, P: Problem> Gradient for ArgminAdapter<'a, P> {
    type Param = Theta;
    type Gradient = Grad;

    fn gradient(&self, x: &Self::Param) -> Result<Self::Gradient, Error> {
        let g = self.problem.gradient(x)?;
        validate_grad(&g, x.len())?;
        Ok(g)
    }
}

impl<'a, P: Problem> ArgminHessian for ArgminAdapter<'a, P> {
    type Param = Theta;
    type Hessian = Hessian;

    fn hessian(&self, x: &Self::Param) -> Result<Self::Hessian, Error> {
        let h = self.problem.hessian(x)?;
        validate_hessian(&h, x.len())?;
        Ok(h)
    }
}
