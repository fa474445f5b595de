use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_output_dir() -> String {
    "ads_demo_visualizations_output".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            log_dir: default_log_dir(),
        }
    }
}
