pub mod engine;
pub mod generator;
pub mod preview;
pub mod publisher;
pub mod report;

pub use crate::domain::model::{Identifier, LineItem, Order, PublishOutcome, PublishReport};
pub use crate::domain::ports::{ConfigProvider, OrderSink};
pub use crate::utils::error::Result;
