#![deny(unreachable_pub)]
//! Shipping cost estimation across pluggable carrier strategies
//!
//! A caller asks the [`strategy::StrategyRegistry`] for one named strategy
//! or for all of them, then invokes `calculate` on each. The registry is
//! built once at startup from a static table of built-in carriers and is
//! read-only afterwards.

pub mod config;
mod errors;
pub mod order;
pub mod strategy;

pub use errors::{RateError, RateResult};
pub use order::{Address, Order};
pub use strategy::{CostStrategy, Ems, FedEx, StrategyRegistry, Ups};
