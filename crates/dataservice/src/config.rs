use std::path::{Path, PathBuf};

use dataservice_fetch::{ClientSetting, StatusPolicy};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "DATASERVICE_";

/// Settings merged from a TOML file, then `DATASERVICE_*` variables. Keys
/// missing from both fall back to their defaults.
///
/// ```toml
/// status = "require-success"
///
/// [client]
/// user_agent = "dataservice/0.1"
/// proxies = ["http://127.0.0.1:3128"]
///
/// [client.headers]
/// Accept = "application/json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientSetting,
    pub status: StatusPolicy,
}

/// `~/.config/dataservice/config.toml`
pub fn default_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".config").join("dataservice").join("config.toml"))
}

pub fn load(explicit: Option<&Path>) -> Result<Config, figment::Error> {
    load_from(explicit, default_path())
}

/// An explicit path must exist; the fallback path is skipped when absent.
fn load_from(explicit: Option<&Path>, fallback: Option<PathBuf>) -> Result<Config, figment::Error> {
    let mut fig = Figment::new();

    match explicit {
        Some(path) if !path.is_file() => {
            return Err(format!("config file {} does not exist", path.display()).into());
        }
        Some(path) => fig = fig.merge(Toml::file(path)),
        None => {
            if let Some(path) = fallback {
                fig = fig.merge(Toml::file(path));
            }
        }
    }

    fig.merge(Env::prefixed(ENV_PREFIX).split("__")).extract()
}
