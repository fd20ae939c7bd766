use clap::Parser;
use order_publisher::utils::error::PublishError;
use order_publisher::utils::{logger, validation::Validate};
use order_publisher::{
    CliConfig, ConfigProvider, GeneratorSettings, HttpOrderSink, OrderGenerator, PublishEngine,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting order-publisher");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    if let Err(e) = publish(&config).await {
        exit_with(e);
    }

    Ok(())
}

async fn publish(config: &CliConfig) -> order_publisher::Result<()> {
    let generator = OrderGenerator::new(&GeneratorSettings::from_config(config));
    let sink = HttpOrderSink::new(config.endpoint(), config.request_timeout())?;
    tracing::info!("🎯 Target endpoint: {}", sink.endpoint());

    let mut engine =
        PublishEngine::new_with_monitoring(generator, sink, config.order_count(), config.monitor);
    let report = engine.run().await?;

    if let Some(path) = &config.report {
        report.write_csv(path)?;
        tracing::info!("📁 Report saved to: {}", path);
    }

    Ok(())
}

fn exit_with(e: PublishError) -> ! {
    tracing::error!(
        "❌ Publishing failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
