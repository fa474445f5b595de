use crate::common::*;

#[doc = r#"
    Reads an environment variable, falling back to `default` when it is unset
    or blank. The demo must run on a bare machine, so nothing here is fatal.

    # Arguments
    * `key` - environment variable name
    * `default` - value used when the variable is absent

    # Returns
    * `String` - the variable's value or the default
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            info!("[ENV] '{}' is not set, using default '{}'", key, default);
            default.to_string()
        }
    }
}

#[doc = r#"
    Path of the TOML server config file holding the warehouse coordinates
    (`[warehouse]`) and the output/log directories (`[system]`).

    Read from `SERVER_CONFIG_PATH` on first access and cached afterwards.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> = once_lazy::new(|| {
    get_env_or_default("SERVER_CONFIG_PATH", "./config/server_config.toml")
});
