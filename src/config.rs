//! Solver configuration, read from a TOML file. Every field is optional;
//! command line arguments take precedence over values given here.
//!
//! ```toml
//! domain = "route"
//! engine = "astar"
//! heuristic = "domain"
//! verbosity = "verbose"
//! output = "romania.plan"
//! ```

use crate::domains::DomainName;
use crate::search::{search_engines::SearchEngineName, HeuristicName, Verbosity};
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to load config {path}, does the file exist?")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse config {path}, is it valid?")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SolverConfig {
    pub domain: Option<DomainName>,
    pub engine: Option<SearchEngineName>,
    pub heuristic: Option<HeuristicName>,
    pub verbosity: Option<Verbosity>,
    pub output: Option<PathBuf>,
}

impl SolverConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}
