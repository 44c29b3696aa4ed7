//! Layered configuration for the `emhun` binary (§6 EXPANSION).
//!
//! The core library never touches this module or its dependencies;
//! [`crate::mining_config::MiningConfig`] is the only configuration the
//! mining pipeline itself accepts. This is the figment-backed superset
//! the CLI resolves from a TOML file and `EMHUN_`-prefixed environment
//! variables before building a `MiningConfig` from it.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

fn default_emit_positive_bound_strict() -> bool {
    true
}

fn default_order_transactions_by_tu() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_parallel() -> bool {
    false
}

/// The full set of CLI-resolvable settings, merged from defaults, an
/// optional TOML file, and `EMHUN_`-prefixed environment variables, in
/// that ascending priority order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// The utility threshold; not defaulted, callers must supply it via
    /// `--min-util`, a config file, or `EMHUN_MIN_UTIL`.
    pub min_util: f64,

    #[serde(default = "default_emit_positive_bound_strict")]
    pub emit_positive_bound_strict: bool,

    #[serde(default = "default_order_transactions_by_tu")]
    pub order_transactions_by_tu: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Fork the top-level `Search` pivots across a Rayon thread pool.
    /// Only has an effect when `emhun` is built with the `parallel`
    /// feature; otherwise accepted and silently ignored.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl CliConfig {
    /// Loads configuration layered as: built-in defaults, then
    /// `path` (if it exists), then `EMHUN_*` environment variables.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::defaults()));

        if let Some(path) = path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment.merge(Env::prefixed("EMHUN_")).extract()
    }

    fn defaults() -> Self {
        CliConfig {
            min_util: 0.0,
            emit_positive_bound_strict: default_emit_positive_bound_strict(),
            order_transactions_by_tu: default_order_transactions_by_tu(),
            log_level: default_log_level(),
            parallel: default_parallel(),
        }
    }

    /// Projects the CLI-only settings down to the pure tunables the
    /// mining core accepts.
    pub fn to_mining_config(&self) -> crate::mining_config::MiningConfig {
        crate::mining_config::MiningConfig {
            min_util: self.min_util,
            emit_positive_bound_strict: self.emit_positive_bound_strict,
            order_transactions_by_tu: self.order_transactions_by_tu,
            parallel: self.parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_with_no_file_and_no_env() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.min_util, 0.0);
        assert!(config.emit_positive_bound_strict);
        assert!(config.order_transactions_by_tu);
        assert_eq!(config.log_level, "info");
        assert!(!config.parallel);
    }

    #[test]
    fn missing_file_path_is_silently_skipped() {
        let config = CliConfig::load(Some(std::path::Path::new("/nonexistent/emhun.toml"))).unwrap();
        assert_eq!(config.min_util, 0.0);
    }

    #[test]
    fn to_mining_config_carries_thresholds_through() {
        let mut config = CliConfig::load(None).unwrap();
        config.min_util = 42.0;
        config.emit_positive_bound_strict = false;
        let mining = config.to_mining_config();
        assert_eq!(mining.min_util, 42.0);
        assert!(!mining.emit_positive_bound_strict);
    }
}
