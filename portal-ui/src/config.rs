//! Build-time configuration.
//!
//! `portal.toml` is embedded into the bundle and `PORTAL_*` variables set
//! during the build override it, so the auth mode cannot change at runtime.

use analytics_portal::config::{
    Config, ENV_AUTH_MODE, ENV_LOGIN_URL, ENV_LOG_LEVEL, ENV_TODOS_URL,
};

const EMBEDDED_CONFIG: &str = include_str!("../portal.toml");

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_AUTH_MODE => option_env!("PORTAL_AUTH_MODE"),
        ENV_LOGIN_URL => option_env!("PORTAL_LOGIN_URL"),
        ENV_TODOS_URL => option_env!("PORTAL_TODOS_URL"),
        ENV_LOG_LEVEL => option_env!("PORTAL_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load the embedded configuration, falling back to defaults on error
pub fn load() -> Config {
    let mut config = match Config::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("{}; using defaults", e).into());
            Config::default()
        }
    };

    if let Err(e) = config.apply_overrides(build_env) {
        web_sys::console::error_1(&format!("{}; ignoring build overrides", e).into());
    }

    config
}
