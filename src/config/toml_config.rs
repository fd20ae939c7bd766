use crate::config::validate_provider;
use crate::core::ConfigProvider;
use crate::domain::ports::{
    DEFAULT_CUSTOMER_POOL_SIZE, DEFAULT_ITEM_POOL_SIZE, DEFAULT_MAX_LINE_ITEMS, DEFAULT_MAX_PRICE,
    DEFAULT_MAX_QUANTITY, DEFAULT_ORDER_COUNT,
};
use crate::utils::error::{PublishError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target: TargetConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    pub monitoring: Option<MonitoringConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub orders: Option<usize>,
    pub items: Option<usize>,
    pub customers: Option<usize>,
    pub max_line_items: Option<u32>,
    pub max_quantity: Option<u32>,
    pub max_price: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub report_path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PublishError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PublishError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ORDERS_ENDPOINT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PublishError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }

    pub fn report_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.report_path.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.target.endpoint
    }

    fn order_count(&self) -> usize {
        self.generation.orders.unwrap_or(DEFAULT_ORDER_COUNT)
    }

    fn item_pool_size(&self) -> usize {
        self.generation.items.unwrap_or(DEFAULT_ITEM_POOL_SIZE)
    }

    fn customer_pool_size(&self) -> usize {
        self.generation.customers.unwrap_or(DEFAULT_CUSTOMER_POOL_SIZE)
    }

    fn max_line_items(&self) -> u32 {
        self.generation.max_line_items.unwrap_or(DEFAULT_MAX_LINE_ITEMS)
    }

    fn max_quantity(&self) -> u32 {
        self.generation.max_quantity.unwrap_or(DEFAULT_MAX_QUANTITY)
    }

    fn max_price(&self) -> u32 {
        self.generation.max_price.unwrap_or(DEFAULT_MAX_PRICE)
    }

    fn seed(&self) -> Option<u64> {
        self.generation.seed
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.target.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // endpoint 與 timeout 在 [target]，其餘在 [generation]
        validate_provider(self, "generation.").map_err(|e| match e {
            PublishError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => PublishError::InvalidConfigValueError {
                field: field
                    .replace("generation.endpoint", "target.endpoint")
                    .replace("generation.timeout_seconds", "target.timeout_seconds"),
                value,
                reason,
            },
            other => other,
        })?;

        if let Some(path) = self.report_path() {
            validate_path("output.report_path", path)?;
        }
        Ok(())
    }
}
