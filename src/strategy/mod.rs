//! Strategy Interface Module
//!
//! This module provides the pluggable cost-calculation interface and the
//! registry that discovers the built-in carrier variants. Strategies are
//! decoupled from callers - they receive an order and return an estimate,
//! nothing flows back into the registry.
//!
//! # Design Philosophy
//!
//! - **Decoupled**: Strategies know nothing about where orders come from
//! - **Testable**: Call `calculate` directly; EMS takes an injectable seed
//! - **Stateless**: Every lookup constructs a fresh instance
//! - **Closed set**: Variants are registered from a static table at
//!   startup, not discovered at runtime
//!
//! # Example
//!
//! ```rust
//! use shipping_rates::order::{Address, Order};
//! use shipping_rates::strategy::StrategyRegistry;
//!
//! let registry = StrategyRegistry::with_builtins();
//! let order = Order::new(1000.0, Address::for_country("Russia"));
//!
//! let fedex = registry.get("FedEx").unwrap();
//! assert_eq!(fedex.calculate(&order), 1000.0 / 7.0);
//!
//! for strategy in registry.list_all().unwrap() {
//!     println!(
//!         "Shipping cost from {} is: {}",
//!         strategy.name(),
//!         strategy.calculate(&order)
//!     );
//! }
//! ```

pub mod carriers;
pub mod registry;
mod traits;

pub use carriers::{Ems, FedEx, Ups};
pub use registry::{StrategyFactory, StrategyRegistry};
pub use traits::CostStrategy;
