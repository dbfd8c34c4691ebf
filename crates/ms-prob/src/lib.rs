//! Probability building blocks for MicroStat.
//!
//! This crate hosts the Beta distribution evaluator used in small,
//! allocation-light deployments:
//! - a typed surface ([`beta::Beta`]) reporting failures through `Result`
//! - a legacy surface ([`compat::BetaDistribution`]) reproducing the
//!   in-band numeric sentinel contract of the reference implementation
//!
//! Special functions (complete/incomplete Beta, digamma) are consumed from
//! `statrs`, not re-derived here.

pub mod beta;
pub mod compat;
