use crate::core::generator::{GeneratorSettings, OrderGenerator};
use crate::core::{ConfigProvider, Order};
use crate::utils::error::Result;

/// What a run would send, built without touching the network.
#[derive(Debug, Clone)]
pub struct DryRunPreview {
    pub endpoint: String,
    pub order_count: usize,
    pub sample: Order,
}

impl DryRunPreview {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut generator = OrderGenerator::new(&GeneratorSettings::from_config(config));
        let sample = generator.next_order()?;

        Ok(Self {
            endpoint: config.endpoint().to_string(),
            order_count: config.order_count(),
            sample,
        })
    }

    pub fn sample_body(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.sample)?)
    }

    pub fn render(&self) -> Result<String> {
        Ok(format!(
            "Would POST {} orders to {}\nSample body:\n{}",
            self.order_count,
            self.endpoint,
            self.sample_body()?
        ))
    }
}
