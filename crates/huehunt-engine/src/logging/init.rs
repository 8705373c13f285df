use std::sync::Once;

use log::LevelFilter;

/// Crates whose debug output drowns the game's own; held at `warn` unless a
/// filter names them explicitly.
const NOISY_DEPS: &[&str] = &["png", "image"];

/// Logger configuration.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`.
/// Filters use the `env_logger` syntax, e.g. "huehunt_game=debug,warn".
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Prefix lines with the emitting module path.
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            show_target: false,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter string, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), show_target: true, ..Self::default() }
    }

    /// The filter string `init_logging` will apply, given the current `RUST_LOG`.
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        let base = match (&self.env_filter, rust_log) {
            (Some(f), _) => f.clone(),
            (None, Some(f)) if !f.trim().is_empty() => f.to_owned(),
            _ => self.default_level.to_string().to_ascii_lowercase(),
        };
        let mut directives = vec![base];
        for dep in NOISY_DEPS {
            if !directives[0].contains(dep) {
                directives.push(format!("{dep}=warn"));
            }
        }
        directives.join(",")
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` once; later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok().as_deref());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_target(config.show_target);

        // try_init: a test harness or embedding app may already own the logger.
        if builder.try_init().is_err() {
            return;
        }
        log::debug!("logging initialized ({filter})");
    });
}
