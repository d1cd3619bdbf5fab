//! Soccer match-outcome prediction: expected goals from team strengths and travel, Monte Carlo
//! Poisson simulation and a Dixon-Coles-corrected scoregrid.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod expectation;
pub mod histogram;
pub mod predictor;
pub mod print;
pub mod scoregrid;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
