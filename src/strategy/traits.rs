//! Strategy trait definition

use crate::order::Order;

/// Cost calculation interface shared by all carrier variants
///
/// A strategy is a named, stateless cost function over an [`Order`]. It is
/// completely decoupled from how orders are built or where estimates are
/// displayed - it only maps an order to a number.
///
/// # Contract
///
/// `calculate` takes an order with `cost >= 0` and a destination address,
/// and returns a finite, non-negative estimate in the same currency unit
/// as `order.cost`. No side effects. Behavior on malformed input (negative
/// or non-finite cost) is unspecified by the contract and left to each
/// variant; callers can screen with [`Order::is_valid`] first.
///
/// One variant (EMS) is intentionally non-deterministic: two calls with
/// the same order are not required to return the same value. No variant
/// holds state across calls.
///
/// # Testing
///
/// Strategies can be tested in isolation by calling the trait methods
/// directly:
///
/// ```rust
/// use shipping_rates::order::{Address, Order};
/// use shipping_rates::strategy::CostStrategy;
///
/// fn check_strategy(strategy: &impl CostStrategy) {
///     let order = Order::new(1000.0, Address::for_country("Russia"));
///     let estimate = strategy.calculate(&order);
///     assert!(estimate >= 0.0);
///     assert!(!strategy.name().is_empty());
/// }
/// ```
pub trait CostStrategy: Send + Sync {
    /// Compute the shipping cost estimate for the given order
    ///
    /// # Arguments
    /// * `order` - The shipment to price; `order.cost` must be >= 0
    ///
    /// # Returns
    /// A finite, non-negative cost in the same currency unit as `order.cost`
    fn calculate(&self, order: &Order) -> f64;

    /// Get the carrier name
    ///
    /// Used as the registry key and for display. Lookup by this name is
    /// exact-match.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Address, Order};

    // Example: fixed-fee strategy for exercising the trait surface
    struct FlatFee {
        fee: f64,
    }

    impl CostStrategy for FlatFee {
        fn calculate(&self, _order: &Order) -> f64 {
            self.fee
        }

        fn name(&self) -> &str {
            "FlatFee"
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let strategy: Box<dyn CostStrategy> = Box::new(FlatFee { fee: 9.5 });
        let order = Order::new(100.0, Address::for_country("USA"));

        assert_eq!(strategy.calculate(&order), 9.5);
        assert_eq!(strategy.name(), "FlatFee");
    }

    #[test]
    fn test_calculate_ignores_order_state_it_does_not_consume() {
        let strategy = FlatFee { fee: 1.0 };
        let plain = Order::new(10.0, Address::for_country("USA"));
        let with_origin = plain.clone().with_origin(Address::for_country("Japan"));

        assert_eq!(strategy.calculate(&plain), strategy.calculate(&with_origin));
    }
}
