pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::ports::{
    DEFAULT_CUSTOMER_POOL_SIZE, DEFAULT_ENDPOINT, DEFAULT_ITEM_POOL_SIZE, DEFAULT_MAX_LINE_ITEMS,
    DEFAULT_MAX_PRICE, DEFAULT_MAX_QUANTITY, DEFAULT_ORDER_COUNT, MAX_LINE_ITEMS_LIMIT,
    MAX_ORDER_COUNT, MAX_POOL_SIZE,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "order-publisher"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Generate synthetic orders and POST them to an orders endpoint")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_ENDPOINT))]
    pub endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_ORDER_COUNT))]
    pub orders: usize,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_ITEM_POOL_SIZE))]
    pub items: usize,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_CUSTOMER_POOL_SIZE))]
    pub customers: usize,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_MAX_LINE_ITEMS))]
    pub max_line_items: u32,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_MAX_QUANTITY))]
    pub max_quantity: u32,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_MAX_PRICE))]
    pub max_price: u32,

    #[cfg_attr(feature = "cli", arg(long, help = "Seed for reproducible orders"))]
    pub seed: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub timeout_seconds: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long, help = "Write a CSV report of every post"))]
    pub report: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log CPU and memory usage"))]
    pub monitor: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            orders: DEFAULT_ORDER_COUNT,
            items: DEFAULT_ITEM_POOL_SIZE,
            customers: DEFAULT_CUSTOMER_POOL_SIZE,
            max_line_items: DEFAULT_MAX_LINE_ITEMS,
            max_quantity: DEFAULT_MAX_QUANTITY,
            max_price: DEFAULT_MAX_PRICE,
            seed: None,
            timeout_seconds: None,
            report: None,
            verbose: false,
            json_logs: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn order_count(&self) -> usize {
        self.orders
    }

    fn item_pool_size(&self) -> usize {
        self.items
    }

    fn customer_pool_size(&self) -> usize {
        self.customers
    }

    fn max_line_items(&self) -> u32 {
        self.max_line_items
    }

    fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    fn max_price(&self) -> u32 {
        self.max_price
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self, "")?;
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }
        Ok(())
    }
}

/// Checks shared by every config source. `prefix` namespaces the field names in errors.
pub(crate) fn validate_provider<C: ConfigProvider + ?Sized>(config: &C, prefix: &str) -> Result<()> {
    let field = |name: &str| format!("{}{}", prefix, name);

    validate_url(&field("endpoint"), config.endpoint())?;
    validate_range(&field("orders"), config.order_count(), 1, MAX_ORDER_COUNT)?;
    validate_range(&field("items"), config.item_pool_size(), 1, MAX_POOL_SIZE)?;
    validate_range(&field("customers"), config.customer_pool_size(), 1, MAX_POOL_SIZE)?;
    validate_range(
        &field("max_line_items"),
        config.max_line_items(),
        1,
        MAX_LINE_ITEMS_LIMIT,
    )?;
    validate_range(&field("max_quantity"), config.max_quantity(), 1, u32::MAX)?;
    validate_range(&field("max_price"), config.max_price(), 1, u32::MAX)?;

    if let Some(timeout) = config.request_timeout() {
        validate_range(&field("timeout_seconds"), timeout.as_secs(), 1, 3600)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PublishError;

    #[test]
    fn test_defaults_match_fixed_run() {
        let config = CliConfig::default();

        assert_eq!(config.endpoint(), "http://localhost:3000/orders");
        assert_eq!(config.order_count(), 120);
        assert_eq!(config.item_pool_size(), 1000);
        assert_eq!(config.customer_pool_size(), 100);
        assert_eq!(config.max_line_items(), 10);
        assert_eq!(config.max_quantity(), 10);
        assert_eq!(config.max_price(), 10_000);
        assert!(config.request_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_customers_rejected() {
        let config = CliConfig {
            customers: 0,
            ..Default::default()
        };

        match config.validate() {
            Err(PublishError::InvalidConfigValueError { field, .. }) => assert_eq!(field, "customers"),
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_max_line_items_rejected() {
        let config = CliConfig {
            max_line_items: u32::MAX,
            seed: Some(1),
            ..Default::default()
        };

        match config.validate() {
            Err(PublishError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "max_line_items")
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_counts_rejected() {
        let too_many_orders = CliConfig {
            orders: MAX_ORDER_COUNT + 1,
            ..Default::default()
        };
        let too_many_items = CliConfig {
            items: usize::MAX,
            ..Default::default()
        };
        let too_many_customers = CliConfig {
            customers: MAX_POOL_SIZE + 1,
            ..Default::default()
        };

        assert!(too_many_orders.validate().is_err());
        assert!(too_many_items.validate().is_err());
        assert!(too_many_customers.validate().is_err());
    }

    #[test]
    fn test_limits_themselves_accepted() {
        let config = CliConfig {
            orders: MAX_ORDER_COUNT,
            customers: MAX_POOL_SIZE,
            max_line_items: MAX_LINE_ITEMS_LIMIT,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let config = CliConfig {
            endpoint: "ftp://localhost/orders".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_cli_args() {
        let config = CliConfig::parse_from([
            "order-publisher",
            "--endpoint",
            "http://127.0.0.1:8080/orders",
            "--orders",
            "5",
            "--seed",
            "99",
            "--report",
            "out/report.csv",
        ]);

        assert_eq!(config.endpoint, "http://127.0.0.1:8080/orders");
        assert_eq!(config.orders, 5);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.items, 1000);
        assert_eq!(config.report.as_deref(), Some("out/report.csv"));
        assert!(config.validate().is_ok());
    }
}
