use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::configs::{log_config::*, style_config::*};

#[doc = "Function to initialize System configuration information instances"]
/// A missing file means "use defaults". A file that exists but does not parse
/// is an error for the caller to report.
///
/// # Arguments
/// * `config_path` - location of the system config TOML
///
/// # Returns
/// * `anyhow::Result<Config>` - parsed config, or defaults when the file is absent
pub fn initialize_server_config(config_path: &str) -> anyhow::Result<Config> {
    if !Path::new(config_path).exists() {
        return Ok(Config::default());
    }

    Config::load(config_path)
}

#[derive(Debug, Default)]
pub struct Config {
    pub style: Arc<StyleConfig>,
    pub log: Arc<LogConfig>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigNotSafe {
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        let system_config: ConfigNotSafe = read_toml_from_file::<ConfigNotSafe>(config_path)
            .with_context(|| format!("[Config::load] unable to parse '{}'", config_path))?;

        Ok(Config {
            style: Arc::new(system_config.style),
            log: Arc::new(system_config.log),
        })
    }
}
