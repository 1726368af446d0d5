use serde::{Deserialize, Serialize};

use crate::autocomplete::Suggestion;

/// Term registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterReq {
    #[serde(default)]
    pub term: String,
}

/// Autocomplete query params.
#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub prefix: String,
    pub boost: Option<String>,
    pub limit: Option<usize>,
}

/// Autocomplete response body.
#[derive(Debug, Serialize)]
pub struct SuggestResults {
    pub suggestions: Vec<Suggestion>,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub address: String,
}

/// Zero values mean "not set" so that merged config files only override what
/// they specify. Defaults are applied when the engine is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub max_limit: usize,
    #[serde(default)]
    pub max_term_len: Option<usize>,
    #[serde(default)]
    pub seed_file: String,
}
