use httpmock::prelude::*;
use order_publisher::utils::validation::Validate;
use order_publisher::{
    ConfigProvider, DryRunPreview, GeneratorSettings, HttpOrderSink, OrderGenerator, PublishEngine,
    TomlConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_toml_config_drives_publish_run() {
    let server = MockServer::start();
    let orders_mock = server.mock(|when, then| {
        when.method(POST).path("/orders");
        then.status(201);
    });

    let toml_content = format!(
        r#"
[target]
endpoint = "{}"
timeout_seconds = 5

[generation]
orders = 6
items = 20
customers = 3
max_line_items = 2
seed = 6
"#,
        server.url("/orders")
    );

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = TomlConfig::from_file(temp_file.path()).unwrap();
    config.validate().unwrap();

    let generator = OrderGenerator::new(&GeneratorSettings::from_config(&config));
    assert_eq!(generator.customers().len(), 3);

    let sink = HttpOrderSink::new(config.endpoint(), config.request_timeout()).unwrap();
    let report = PublishEngine::new(generator, sink, config.order_count())
        .run()
        .await
        .unwrap();

    orders_mock.assert_hits(6);
    assert_eq!(report.total(), 6);
    assert!(report.outcomes.iter().all(|o| o.line_items <= 2));
}

#[tokio::test]
async fn test_dry_run_sends_nothing() {
    let server = MockServer::start();
    let orders_mock = server.mock(|when, then| {
        when.method(POST).path("/orders");
        then.status(201);
    });

    let toml_content = format!(
        r#"
[target]
endpoint = "{}"

[generation]
orders = 50
seed = 9
"#,
        server.url("/orders")
    );
    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    config.validate().unwrap();

    let preview = DryRunPreview::from_config(&config).unwrap();
    let rendered = preview.render().unwrap();

    orders_mock.assert_hits(0);
    assert_eq!(preview.order_count, 50);
    assert_eq!(preview.endpoint, server.url("/orders"));
    assert!((1..=10).contains(&preview.sample.line_items.len()));
    assert!(rendered.contains(&server.url("/orders")));
    assert!(rendered.contains("\"customer_id\""));
}
