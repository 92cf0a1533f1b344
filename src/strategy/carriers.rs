//! Built-in carrier strategies
//!
//! Each carrier is an independent type implementing [`CostStrategy`]; none
//! of them share state. The formulas are fixed business rules:
//!
//! | Carrier | Estimate |
//! |---------|----------|
//! | UPS     | `cost * 0.3` |
//! | FedEx   | `cost / 7` to Russia or USA, `cost / 5` elsewhere |
//! | EMS     | `cost * r`, `r` uniform in `[0, 1)` per call |

use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::order::Order;

use super::CostStrategy;

/// UPS: flat 30% of the declared order value, country-independent
#[derive(Debug, Default)]
pub struct Ups;

impl Ups {
    /// Registry key for this carrier
    pub const NAME: &'static str = "UPS";
}

impl CostStrategy for Ups {
    fn calculate(&self, order: &Order) -> f64 {
        order.cost * 0.3
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// FedEx: discounted divisor for Russia and USA destinations
///
/// The country match is exact and case-sensitive ("russia" or "usa" take
/// the default divisor). This mirrors the carrier's published table; do
/// not normalize or widen the match.
#[derive(Debug, Default)]
pub struct FedEx;

impl FedEx {
    /// Registry key for this carrier
    pub const NAME: &'static str = "FedEx";
}

impl CostStrategy for FedEx {
    fn calculate(&self, order: &Order) -> f64 {
        match order.destination.country.as_str() {
            "Russia" | "USA" => order.cost / 7.0,
            _ => order.cost / 5.0,
        }
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// EMS: quotes a uniformly random fraction of the order value
///
/// Each call draws a fresh `r` in `[0, 1)` and returns `cost * r`, so for
/// positive `cost` the estimate falls in `[0, cost)`. Repeated calls are
/// not required to agree.
///
/// The randomness source is injected at construction so tests can pin a
/// seed ([`Ems::from_seed`]). It is the one shared mutable resource in
/// this crate and sits behind a `Mutex`, which keeps the type `Sync`;
/// `calculate` holds the lock only for the single draw.
#[derive(Debug)]
pub struct Ems {
    rng: Mutex<StdRng>,
}

impl Ems {
    /// Registry key for this carrier
    pub const NAME: &'static str = "EMS";

    /// Create an EMS strategy with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an EMS strategy using the given generator
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Create an EMS strategy with a deterministic seed
    ///
    /// Intended for tests that need reproducible estimates.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Ems {
    fn default() -> Self {
        Self::new()
    }
}

impl CostStrategy for Ems {
    fn calculate(&self, order: &Order) -> f64 {
        // A poisoned lock only means another draw panicked; the generator
        // itself is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        order.cost * rng.gen::<f64>()
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
