use crate::common::*;

use crate::model::configs::{system_config::*, warehouse_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    TotalConfig::load(&SERVER_CONFIG_PATH)
}

#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    #[serde(default)]
    pub warehouse: WarehouseConfig,
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(skip)]
    pub load_error: Option<String>,
}

#[doc = "Warehouse connection and table information"]
pub fn get_warehouse_config_info() -> &'static WarehouseConfig {
    &TOTAL_CONFIG.warehouse
}

#[doc = "Output and logging settings"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

#[doc = r#"
    Why the server config file could not be used, if it could not.

    The config is read before the logger exists (the logger needs `log_dir`),
    so the failure is kept here and reported by `main` once logging is up.
"#]
pub fn get_config_load_error() -> Option<&'static str> {
    TOTAL_CONFIG.load_error.as_deref()
}

impl TotalConfig {
    #[doc = r#"
        Reads the server config file. A missing or malformed file is not fatal:
        the built-in defaults are used and the cause is kept in `load_error`.
        The placeholder coordinates make the warehouse call fail, so the run
        continues on the sample data.
    "#]
    pub fn load(config_path: &str) -> Self {
        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => TotalConfig {
                load_error: Some(format!(
                    "Failed to read '{}', falling back to default settings. {:?}",
                    config_path, e
                )),
                ..TotalConfig::default()
            },
        }
    }
}
