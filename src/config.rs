use std::path::PathBuf;
use std::sync::LazyLock;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// Runtime configuration, resolved once from defaults merged with
/// `RERANK_GATE_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub loglevel: String,
    /// Substring that marks a model identifier as a BGE reranker.
    pub model_keyword: String,
    /// Substring that marks a prompt template as relevance-style.
    pub template_keyword: String,
    /// Directory of scenario JSON files; the builtin table is used when unset.
    pub scenario_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            model_keyword: "bge".to_string(),
            template_keyword: "relevance".to_string(),
            scenario_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, GateError> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("RERANK_GATE_"))
            .extract()?;
        Ok(cfg)
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| match Config::load() {
    Ok(cfg) => cfg,
    Err(e) => {
        eprintln!("invalid configuration ({e}); using defaults");
        Config::default()
    }
});
