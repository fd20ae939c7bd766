pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::engine::PublishEngine;
pub use crate::core::generator::{GeneratorSettings, IdentifierPool, OrderGenerator};
pub use crate::core::preview::DryRunPreview;
pub use crate::core::publisher::HttpOrderSink;
pub use crate::domain::model::{Identifier, LineItem, Order, PublishOutcome, PublishReport};
pub use crate::domain::ports::{ConfigProvider, OrderSink};
pub use crate::utils::error::{PublishError, Result};
