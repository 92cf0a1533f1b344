//! Shipping Quote Binary
//!
//! Prints shipping cost estimates for a configured order: first the one
//! strategy named in the config (default "FedEx"), then every registered
//! strategy for comparison.
//!
//! ## Setup
//!
//! 1. Create a `quote.json` (or .toml/.yaml) config:
//!    ```json
//!    {
//!      "quote": {
//!        "strategy": "FedEx",
//!        "order": {
//!          "cost": 1000.0,
//!          "destination": { "country": "Russia" }
//!        }
//!      }
//!    }
//!    ```
//!
//! 2. Run the quote tool:
//!    ```bash
//!    cargo run --bin quote -- --config quote.json
//!    ```

use std::env;
use std::process::ExitCode;

use log::{error, info, warn};

use shipping_rates::config::Settings;
use shipping_rates::order::{Address, Order};
use shipping_rates::strategy::StrategyRegistry;

fn main() -> ExitCode {
    // Parse arguments
    let args: Vec<String> = env::args().collect();
    let settings = if args.len() > 2 && args[1] == "--config" {
        match Settings::new(&args[2]) {
            Ok(settings) => Some(settings),
            Err(e) => {
                env_logger::Builder::from_env(
                    env_logger::Env::default().default_filter_or("info"),
                )
                .init();
                error!("Failed to load config: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        None
    };

    let level = settings
        .as_ref()
        .map(|s| s.log.level.clone())
        .unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let (strategy_name, order) = match settings {
        Some(s) => {
            let order = s.quote.order.to_order();
            (s.quote.strategy, order)
        }
        None => {
            info!("No config file provided, using example order");
            (
                Some("FedEx".to_string()),
                Order::new(1000.0, Address::for_country("Russia")),
            )
        }
    };

    if !order.is_valid() {
        error!("Invalid order: cost {} must be finite and >= 0", order.cost);
        return ExitCode::FAILURE;
    }

    info!(
        "Quoting order: cost={} destination={}",
        order.cost, order.destination.country
    );

    let registry = StrategyRegistry::with_builtins();

    if let Some(name) = strategy_name {
        let strategy = match registry.get(&name) {
            Ok(strategy) => strategy,
            Err(e) => {
                error!("{}", e);
                warn!("Known strategies: {}", registry.names().join(", "));
                return ExitCode::FAILURE;
            }
        };
        println!(
            "Shipping cost from {} is: {}",
            strategy.name(),
            strategy.calculate(&order)
        );
    }

    let strategies = match registry.list_all() {
        Ok(strategies) => strategies,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    for strategy in strategies {
        println!(
            "Shipping cost from {} is: {}",
            strategy.name(),
            strategy.calculate(&order)
        );
    }

    ExitCode::SUCCESS
}
