use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DATABASE_FILE: &str = "dictionary.db";

fn default_search_paths() -> Vec<PathBuf> {
    ["dictionary.db", "../dictionary.db", "../../dictionary.db"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

fn default_home_dir_name() -> String {
    ".tridict".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Explicit database path, skips discovery when set
    pub path: Option<PathBuf>,
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
    #[serde(default = "default_home_dir_name")]
    pub home_dir_name: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            search_paths: default_search_paths(),
            home_dir_name: default_home_dir_name(),
        }
    }
}

impl DictionaryConfig {
    /// Locate the dictionary database: the explicit path, then each search
    /// path relative to the working directory, then `~/<home_dir_name>/dictionary.db`.
    pub fn resolve_database(&self) -> Option<PathBuf> {
        self.resolve_with_home(dirs::home_dir().as_deref())
    }

    fn resolve_with_home(&self, home: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = &self.path {
            return path.is_file().then(|| path.clone());
        }

        self.candidates(home).into_iter().find(|p| p.is_file())
    }

    /// Every location discovery will try, in order
    pub fn candidates(&self, home: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = self.search_paths.clone();
        if let Some(home) = home {
            candidates.push(home.join(&self.home_dir_name).join(DATABASE_FILE));
        }
        candidates
    }
}
