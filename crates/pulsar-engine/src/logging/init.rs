use std::sync::Once;

use log::LevelFilter;

/// How the host wants engine logs emitted.
///
/// Filters use the `env_logger` directive syntax, e.g.
/// `"pulsar_engine::runtime=trace,info"` to see pacing overruns.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter. Wins over `RUST_LOG` when set.
    pub env_filter: Option<String>,
    /// Level used when neither a filter nor `RUST_LOG` is given.
    pub default_level: LevelFilter,
    /// Millisecond timestamps line up with the frame clock; off for terse output.
    pub timestamps: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            timestamps: true,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Filter directives this config resolves to, given the `RUST_LOG` value.
    fn directives(&self, rust_log: Option<String>) -> Option<String> {
        let given = |f: &String| !f.trim().is_empty();
        self.env_filter.clone().filter(given).or_else(|| rust_log.filter(given))
    }

    fn builder(&self, rust_log: Option<String>) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        match self.directives(rust_log) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(self.default_level);
            }
        }

        if self.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }
        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on first call; later calls do nothing.
///
/// Returns `true` only for the call that installed it. A logger set elsewhere
/// (a test harness, say) is left in place.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;

    INIT.call_once(|| {
        let mut builder = config.builder(std::env::var("RUST_LOG").ok());
        installed = builder.try_init().is_ok();

        if installed {
            log::debug!("logging initialized at max level {}", log::max_level());
        }
    });

    installed
}
