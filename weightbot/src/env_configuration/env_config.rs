use crate::common::*;

#[doc = "Fallback location of the server configuration file when `SERVER_CONFIG_PATH` is unset."]
pub const DEFAULT_SERVER_CONFIG_PATH: &str = "./config/weightbot.toml";

#[doc = r#"
    Reads an environment variable, falling back to `default` when it is not set.

    Only bootstrap values (where to find the configuration file) come from the
    environment. Everything else lives in the TOML file and is carried around in
    `TotalConfig`.

    # Arguments
    * `key` - environment variable name
    * `default` - value used when the variable is missing

    # Returns
    * `String` - the resolved value
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            info!("[env_config] '{}' is not set, using default '{}'", key, default);
            default.to_string()
        }
    }
}

#[doc = r#"
    Path of the TOML server configuration file.

    Resolved once from `SERVER_CONFIG_PATH` (a `.env` file is honoured because
    `dotenv()` runs before the first access in `main`).
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("SERVER_CONFIG_PATH", DEFAULT_SERVER_CONFIG_PATH));
