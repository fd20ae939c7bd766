use crate::domain::model::Order;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/orders";
pub const DEFAULT_ORDER_COUNT: usize = 120;
pub const DEFAULT_ITEM_POOL_SIZE: usize = 1000;
pub const DEFAULT_CUSTOMER_POOL_SIZE: usize = 100;
pub const DEFAULT_MAX_LINE_ITEMS: u32 = 10;
pub const DEFAULT_MAX_QUANTITY: u32 = 10;
pub const DEFAULT_MAX_PRICE: u32 = 10_000;

// 上限：超過會讓 Vec 預配置直接 abort
pub const MAX_ORDER_COUNT: usize = 1_000_000;
pub const MAX_POOL_SIZE: usize = 1_000_000;
pub const MAX_LINE_ITEMS_LIMIT: u32 = 1000;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn order_count(&self) -> usize;
    fn item_pool_size(&self) -> usize;
    fn customer_pool_size(&self) -> usize;
    fn max_line_items(&self) -> u32;
    fn max_quantity(&self) -> u32;
    fn max_price(&self) -> u32;
    fn seed(&self) -> Option<u64>;
    fn request_timeout(&self) -> Option<Duration>;
}

/// Destination for generated orders. Returns the response status without judging it.
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn publish(&self, order: &Order) -> Result<u16>;
}
