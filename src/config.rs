//! Application config: config/default.toml plus environment variables
//!
//! Load order: TOML file first, then `PARLEY__*` env overrides (double
//! underscore for nesting, e.g. `PARLEY__WEB__PORT=8080`).

use serde::Deserialize;

/// Config root (top level of config/default.toml)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub web: WebSection,
    pub chat: ChatSection,
    pub history: HistorySection,
}

/// [web] section
#[derive(Debug, Clone, Deserialize)]
pub struct WebSection {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    5000
}

/// [chat] section: remote chat collaborator
#[derive(Debug, Clone, Deserialize)]
pub struct ChatSection {
    /// Environment variable holding the API credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Most recent turns sent as context
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            history_window: default_history_window(),
        }
    }
}

fn default_api_key_env() -> String {
    "PERPLEXITY_API_KEY".to_string()
}

fn default_base_url() -> String {
    "https://api.perplexity.ai/chat/completions".to_string()
}

fn default_model() -> String {
    "sonar".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_history_window() -> usize {
    8
}

/// [history] section: transcript bound per session
#[derive(Debug, Clone, Deserialize)]
pub struct HistorySection {
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
        }
    }
}

fn default_max_turns() -> usize {
    30
}

/// Load config, with PARLEY__* env overrides.
///
/// Looks for config/default.toml (then ../config/default.toml, default.toml)
/// as the first source; a missing file just means defaults.
pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{name}.toml");
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("PARLEY")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.web.port, 5000);
        assert_eq!(cfg.history.max_turns, 30);
        assert_eq!(cfg.chat.history_window, 8);
        assert_eq!(cfg.chat.api_key_env, "PERPLEXITY_API_KEY");
    }
}
