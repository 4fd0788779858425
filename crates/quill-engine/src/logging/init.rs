use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "quill_engine=trace,wgpu=warn"). `None` falls back to `RUST_LOG`, then to
/// `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_write_style(mut self, style: env_logger::WriteStyle) -> Self {
        self.write_style = style;
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger.
///
/// Only the first call has an effect. A logger installed elsewhere beforehand
/// is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            log::debug!("a global logger is already installed; keeping it");
            return;
        }
        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default().with_filter("warn"));
        init_logging(LoggingConfig::default());
        log::warn!("still logging");
    }
}
