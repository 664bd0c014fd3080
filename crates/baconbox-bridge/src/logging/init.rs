use std::sync::Once;

use crate::config::BridgeConfig;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "BaconBox=debug,baconbox_bridge=trace") and wins over `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,

    /// Bridge log tag raised to `debug` when no filter is given.
    pub bridge_tag: Option<String>,
}

impl LoggingConfig {
    /// Default setup with the bridge's own messages shown at `debug`.
    pub fn for_bridge(config: &BridgeConfig) -> Self {
        Self {
            bridge_tag: Some(config.log_tag.clone()),
            ..Self::default()
        }
    }

    /// Resolves the filter: explicit filter, then `rust_log`, then `info`
    /// with the bridge tag at `debug`.
    pub fn filter_spec(&self, rust_log: Option<String>) -> String {
        if let Some(filter) = self.env_filter.clone().or(rust_log) {
            return filter;
        }
        match &self.bridge_tag {
            Some(tag) => format!("info,{tag}=debug"),
            None => "info".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            bridge_tag: None,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Later calls are ignored, as is a logger the host process installed first.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.filter_spec(std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init();

        if installed.is_ok() {
            log::debug!("logging initialized with `{filter}`");
        }
    });
}
