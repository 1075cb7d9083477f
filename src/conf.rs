use crate::model::Labels;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{collections::BTreeMap, env, path::Path, path::PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct Conf {
    pub server: ServerConf,
    pub upstream: UpstreamConf,
    pub client: ClientConf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConf {
    pub port: u16,
    pub db_path: PathBuf,
    pub db_timeout_ms: u64,
    pub default_pair: String,
    /// Send raw error text to HTTP callers instead of a generic reason.
    pub expose_errors: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpstreamConf {
    /// Pair code is appended verbatim, so the URL must end with a slash.
    pub url: String,
    pub timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConf {
    pub server_url: String,
    pub output: PathBuf,
    pub timeout_ms: u64,
    pub default_label: String,
    pub labels: BTreeMap<String, String>,
}

impl ClientConf {
    pub fn labels(&self) -> Labels {
        Labels::new(self.labels.clone(), self.default_label.clone())
    }
}

impl Conf {
    pub fn new() -> anyhow::Result<Conf> {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| ".".into());
        Conf::from_figment(Conf::figment(Path::new(&data_dir)))
    }

    pub fn figment(data_dir: &Path) -> Figment {
        let default_conf = include_str!("../fxquote.conf");
        let custom_conf_path = data_dir.join("fxquote.conf");

        Figment::new()
            .merge(Toml::string(default_conf))
            .merge(Toml::file(custom_conf_path))
            .merge(Env::prefixed("FXQUOTE_").split("__"))
    }

    pub fn from_figment(figment: Figment) -> anyhow::Result<Conf> {
        Ok(figment.extract()?)
    }
}
