//! newton::strategy — the descent-strategy ladder.
//!
//! After a numerical failure the direction solver moves one rung down:
//!
//! ```text
//! Newton ──▶ RegularizedNewton(w = min) ──▶ w *= inc ... ──▶ GradientDescent
//!                                            (once w > max)
//! ```
//!
//! Gradient descent is the last rung; further failures keep it there.
//! `reset` returns to plain Newton with zero regularization.
use crate::optimization::newton::options::NewtonParams;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescentStrategy {
    Newton,
    RegularizedNewton,
    GradientDescent,
}

impl DescentStrategy {
    pub fn name(self) -> &'static str {
        match self {
            DescentStrategy::Newton => "Newton",
            DescentStrategy::RegularizedNewton => "regularized Newton",
            DescentStrategy::GradientDescent => "gradient descent",
        }
    }
}

impl fmt::Display for DescentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current rung and regularization weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentLadder {
    strategy: DescentStrategy,
    reg_weight: f64,
    reg_weight_min: f64,
    reg_weight_max: f64,
    reg_weight_inc: f64,
}

impl DescentLadder {
    pub fn new(params: &NewtonParams) -> Self {
        Self {
            strategy: DescentStrategy::Newton,
            reg_weight: 0.0,
            reg_weight_min: params.reg_weight_min,
            reg_weight_max: params.reg_weight_max,
            reg_weight_inc: params.reg_weight_inc,
        }
    }

    pub fn strategy(&self) -> DescentStrategy {
        self.strategy
    }

    /// Diagonal shift applied to the Hessian; zero outside regularized
    /// Newton.
    pub fn reg_weight(&self) -> f64 {
        self.reg_weight
    }

    /// Move one rung down and return the new strategy.
    pub fn increase(&mut self) -> DescentStrategy {
        match self.strategy {
            DescentStrategy::Newton => {
                self.strategy = DescentStrategy::RegularizedNewton;
                self.reg_weight = self.reg_weight_min;
            }
            DescentStrategy::RegularizedNewton => {
                self.reg_weight *= self.reg_weight_inc;
                if self.reg_weight > self.reg_weight_max {
                    self.strategy = DescentStrategy::GradientDescent;
                    self.reg_weight = 0.0;
                }
            }
            DescentStrategy::GradientDescent => {}
        }
        self.strategy
    }

    pub fn reset(&mut self) {
        self.strategy = DescentStrategy::Newton;
        self.reg_weight = 0.0;
    }
}
