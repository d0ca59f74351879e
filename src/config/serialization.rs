//! Config serialization to TOML
//!
//! Single source of truth for the config file format: the template written by
//! `ensure_config_exists` and `config --reset` is generated from the live
//! `Config` value, so a new field shows up in fresh config files the moment it
//! is added here.

use super::Config;

impl Config {
    /// Serialize the config to a commented TOML template
    pub fn to_toml(&self) -> String {
        format!(
            r#"# Rolodex configuration
# Values here are overridden by environment variables:
#   ROLODEX_API_URL, ROLODEX_TIMEOUT_SECS, ROLODEX_THEME
# Runtime flags are env-only: ROLODEX_DEMO=1, ROLODEX_NO_TUI=1

# Remote person source (one random record per GET)
api_url = "{api_url}"

# Per-request timeout in seconds
request_timeout_secs = {request_timeout_secs}

# Theme: "dark", "light", "nord", "solarized"
theme = "{theme}"

[logging]
# Level for the in-app log panel and file output: trace, debug, info, warn, error
# (RUST_LOG takes precedence when set)
level = "{level}"

# Also write logs to rotating files (JSON lines)
file_enabled = {file_enabled}
file_dir = "{file_dir}"
# Rotation: "hourly", "daily", "never"
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            api_url = self.api_url,
            request_timeout_secs = self.request_timeout_secs,
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
