//! Numerical building blocks for Monte Carlo score prediction: a dense matrix, probability
//! slice utilities, Poisson mass and sampling, and random variates drawn from an injected source.

pub mod file;
pub mod linear;
pub mod poisson;
pub mod probs;
pub mod random;
pub mod timed;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
