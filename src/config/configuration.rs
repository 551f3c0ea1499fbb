use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::core::segmentor::MatchStrategy;
use crate::error::{Result, WordsegError};

/// Environment variable holding the path of the yaml configuration file.
pub const CONFIG_ENV: &str = "WORDSEG_CONFIG";

pub trait Configuration {
    fn get_main_dictionary(&self) -> Option<&Path>;
    fn get_ext_dictionaries(&self) -> &[PathBuf];
    fn get_strategy(&self) -> MatchStrategy;
}

/// ```yaml
/// main_dict: dict/thai.dic
/// ext_dicts:
///   - dict/names.dic
/// strategy: longest_match
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct YamlConfiguration {
    main_dict: Option<PathBuf>,
    ext_dicts: Vec<PathBuf>,
    strategy: MatchStrategy,
}

impl YamlConfiguration {
    /// Loads a configuration file. Relative dictionary paths are resolved
    /// against the directory of the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordsegError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cfg: YamlConfiguration = content.parse()?;
        if let Some(base) = path.parent() {
            cfg.main_dict = cfg.main_dict.map(|p| base.join(p));
            cfg.ext_dicts = cfg.ext_dicts.into_iter().map(|p| base.join(p)).collect();
        }
        Ok(cfg)
    }

    /// Loads the file named by `WORDSEG_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

impl FromStr for YamlConfiguration {
    type Err = WordsegError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}

impl Configuration for YamlConfiguration {
    fn get_main_dictionary(&self) -> Option<&Path> {
        self.main_dict.as_deref()
    }

    fn get_ext_dictionaries(&self) -> &[PathBuf] {
        &self.ext_dicts
    }

    fn get_strategy(&self) -> MatchStrategy {
        self.strategy
    }
}
