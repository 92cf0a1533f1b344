//! Strategy registry for discovery and instantiation
//!
//! The registry maps carrier names to factory functions. The variant set
//! is closed at compile time, so "discovery" is a static registration
//! table built once by [`StrategyRegistry::with_builtins`]; the table is
//! read-only after construction and every lookup hands out a freshly
//! constructed strategy instance.

use std::collections::HashMap;

use log::debug;

use crate::errors::{RateError, RateResult};

use super::carriers::{Ems, FedEx, Ups};
use super::CostStrategy;

/// Factory function type for creating strategies
///
/// Strategies are stateless, so instances are never shared or cached;
/// each call constructs a new one.
pub type StrategyFactory = fn() -> Box<dyn CostStrategy>;

/// Registry of available cost strategies
///
/// Built once at startup, immutable thereafter. Lookup is exact-match on
/// the carrier's declared name (no case-folding).
pub struct StrategyRegistry {
    factories: HashMap<String, StrategyFactory>,
    /// Registration order, so `list_all` output is deterministic
    order: Vec<String>,
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with all built-in carriers pre-registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(Ups::NAME, || Box::new(Ups));
        registry.register(FedEx::NAME, || Box::new(FedEx));
        registry.register(Ems::NAME, || Box::new(Ems::new()));

        registry
    }

    /// Register a strategy factory under the given name
    ///
    /// Re-registering a name replaces its factory without changing its
    /// position in the listing order.
    pub fn register(&mut self, name: &str, factory: StrategyFactory) {
        if self.factories.insert(name.to_string(), factory).is_none() {
            self.order.push(name.to_string());
        }
    }

    /// Construct a fresh instance of the strategy registered under `name`
    ///
    /// # Errors
    /// [`RateError::StrategyNotFound`] if `name` is not a registered key.
    pub fn get(&self, name: &str) -> RateResult<Box<dyn CostStrategy>> {
        let factory = self.factories.get(name);
        debug!(
            "strategy registry lookup: name={} found={}",
            name,
            factory.is_some()
        );
        factory
            .map(|f| f())
            .ok_or_else(|| RateError::StrategyNotFound(name.to_string()))
    }

    /// Construct one fresh instance of every registered strategy
    ///
    /// Instances come back in registration order, one per variant.
    ///
    /// # Errors
    /// [`RateError::NoStrategiesRegistered`] if the table is empty; that
    /// is a broken registration step, not a condition to recover from.
    pub fn list_all(&self) -> RateResult<Vec<Box<dyn CostStrategy>>> {
        if self.order.is_empty() {
            return Err(RateError::NoStrategiesRegistered);
        }
        self.order.iter().map(|name| self.get(name)).collect()
    }

    /// Names of all registered strategies, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Address, Order};

    #[test]
    fn test_get_name_round_trip() {
        let registry = StrategyRegistry::with_builtins();

        for name in ["UPS", "FedEx", "EMS"] {
            let strategy = registry.get(name).unwrap();
            assert_eq!(strategy.name(), name);
        }
    }

    #[test]
    fn test_get_unknown_name() {
        let registry = StrategyRegistry::with_builtins();

        match registry.get("DHL") {
            Err(RateError::StrategyNotFound(name)) => assert_eq!(name, "DHL"),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected StrategyNotFound, got a strategy"),
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let registry = StrategyRegistry::with_builtins();
        assert!(registry.get("ups").is_err());
        assert!(registry.get("FEDEX").is_err());
        assert!(registry.get("").is_err());
    }

    #[test]
    fn test_list_all_builtins() {
        let registry = StrategyRegistry::with_builtins();
        let strategies = registry.list_all().unwrap();

        let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["UPS", "FedEx", "EMS"]);
    }

    #[test]
    fn test_list_all_empty_registry() {
        let registry = StrategyRegistry::new();

        assert!(matches!(
            registry.list_all(),
            Err(RateError::NoStrategiesRegistered)
        ));
    }

    #[test]
    fn test_get_returns_fresh_instances() {
        let registry = StrategyRegistry::with_builtins();
        let order = Order::new(1000.0, Address::for_country("USA"));

        // Instances are independently constructed; both outlive each other
        // and agree on the deterministic formula.
        let a = registry.get("UPS").unwrap();
        let b = registry.get("UPS").unwrap();
        assert_eq!(a.calculate(&order), 300.0);
        drop(a);
        assert_eq!(b.calculate(&order), 300.0);
    }

    #[test]
    fn test_register_replaces_without_duplicating() {
        let mut registry = StrategyRegistry::with_builtins();
        registry.register("UPS", || Box::new(Ups));

        assert_eq!(registry.names(), vec!["UPS", "FedEx", "EMS"]);
        assert_eq!(registry.list_all().unwrap().len(), 3);
    }

    #[test]
    fn test_end_to_end_quote() {
        // Order.cost = 1000 to Russia: FedEx quotes 1000/7, UPS 300.
        let registry = StrategyRegistry::with_builtins();
        let order = Order::new(1000.0, Address::for_country("Russia"));

        let fedex = registry.get("FedEx").unwrap();
        assert_eq!(fedex.calculate(&order), 1000.0 / 7.0);

        let ups = registry.get("UPS").unwrap();
        assert_eq!(ups.calculate(&order), 300.0);

        let ems = registry.get("EMS").unwrap();
        let estimate = ems.calculate(&order);
        assert!((0.0..1000.0).contains(&estimate));
    }
}
