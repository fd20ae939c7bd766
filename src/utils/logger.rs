use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Verbosity applies to both formats.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "order_publisher=debug,info"
    } else {
        "order_publisher=info"
    }
}

/// Installs the global subscriber, compact by default or JSON lines for log collectors.
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let json_layer = json.then(|| fmt::layer().with_target(false).json());
    let compact_layer = (!json).then(|| fmt::layer().with_target(false).compact());

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug_for_crate() {
        assert_eq!(default_directives(true), "order_publisher=debug,info");
        assert_eq!(default_directives(false), "order_publisher=info");
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [true, false] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }
}
