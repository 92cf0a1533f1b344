//! Core data types for shipping cost calculation

use serde::{Deserialize, Serialize};

/// Postal address of a shipment endpoint
///
/// All fields are opaque strings; only `country` is consumed by the
/// cost calculations (FedEx selects its divisor by it). Matching on
/// `country` is exact and case-sensitive everywhere in this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    /// Country name (e.g., "Russia", "USA")
    pub country: String,
    /// Region or state
    #[serde(default)]
    pub region: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// Postal code
    #[serde(default)]
    pub postal_code: String,
    /// Contact person at this address
    #[serde(default)]
    pub contact_name: String,
}

impl Address {
    /// Create an address with only a country set
    ///
    /// The remaining fields default to empty strings; they are carried
    /// for display purposes and never inspected by any strategy.
    pub fn for_country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }
}

/// The shipment request being costed
///
/// Immutable once constructed for calculation purposes. The declared
/// value `cost` must be non-negative; the shipping estimate each
/// strategy returns is in the same currency unit as `cost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Declared value of the order (must be >= 0)
    pub cost: f64,
    /// Where the order ships to; required, since FedEx reads its country
    pub destination: Address,
    /// Where the order ships from; unused by all calculations
    #[serde(default)]
    pub origin: Option<Address>,
}

impl Order {
    /// Create a new order
    ///
    /// # Panics
    /// Panics if `cost` is negative.
    pub fn new(cost: f64, destination: Address) -> Self {
        assert!(cost >= 0.0, "cost must be non-negative");
        Self {
            cost,
            destination,
            origin: None,
        }
    }

    /// Attach an origin address
    pub fn with_origin(mut self, origin: Address) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Validate the order for calculation
    ///
    /// Guards orders built from untrusted sources (e.g., deserialized
    /// config) where the `new` assertion never ran.
    pub fn is_valid(&self) -> bool {
        self.cost >= 0.0 && self.cost.is_finite()
    }
}
