use clap::Parser;
use order_publisher::utils::{logger, validation::Validate};
use order_publisher::{
    ConfigProvider, DryRunPreview, GeneratorSettings, HttpOrderSink, OrderGenerator,
    PublishEngine, PublishError, TomlConfig,
};

#[derive(Parser)]
#[command(name = "toml-publish")]
#[command(about = "Order publisher driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "publisher.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the number of orders from config
    #[arg(long)]
    orders: Option<usize>,

    /// Dry run - show the config and one sample order without posting anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_logger(args.verbose, config.json_logs());
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(orders) = args.orders {
        config.generation.orders = Some(orders);
        tracing::info!("🔧 Order count overridden to: {}", orders);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no orders will be posted");
        if let Err(e) = perform_dry_run(&config) {
            exit_with(e);
        }
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    if let Err(e) = publish(&config, monitor_enabled).await {
        exit_with(e);
    }

    Ok(())
}

async fn publish(config: &TomlConfig, monitor_enabled: bool) -> order_publisher::Result<()> {
    let generator = OrderGenerator::new(&GeneratorSettings::from_config(config));
    let sink = HttpOrderSink::new(config.endpoint(), config.request_timeout())?;
    let mut engine =
        PublishEngine::new_with_monitoring(generator, sink, config.order_count(), monitor_enabled);
    let report = engine.run().await?;

    if let Some(path) = config.report_path() {
        report.write_csv(path)?;
        tracing::info!("📁 Report saved to: {}", path);
    }

    Ok(())
}

// 與 order-publisher 相同的退出碼規則，包含 dry run 與報表寫入失敗
fn exit_with(e: PublishError) -> ! {
    tracing::error!(
        "❌ Publishing failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  🎯 Endpoint: {}", config.endpoint());
    tracing::info!("  📦 Orders: {}", config.order_count());
    tracing::info!(
        "  🧾 Pools: {} items, {} customers",
        config.item_pool_size(),
        config.customer_pool_size()
    );
    tracing::info!(
        "  🔢 Limits: {} line items, quantity {}, price {}",
        config.max_line_items(),
        config.max_quantity(),
        config.max_price()
    );
    match config.seed() {
        Some(seed) => tracing::info!("  🎲 Seed: {}", seed),
        None => tracing::info!("  🎲 Seed: random"),
    }
    if let Some(timeout) = config.request_timeout() {
        tracing::info!("  ⏱️ Timeout: {:?}", timeout);
    }
}

fn perform_dry_run(config: &TomlConfig) -> order_publisher::Result<()> {
    let preview = DryRunPreview::from_config(config)?;
    println!("{}", preview.render()?);
    Ok(())
}
