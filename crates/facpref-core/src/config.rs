//! facpref configuration
//!
//! Configuration lives in an optional `facpref.toml` at the root directory.
//! Every field has a default, so a missing file is not an error.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use types::{
    FacprefConfig, FlushPolicy, LedgerConfig, PolicyConfig, DEFAULT_DATA_DIR,
    DEFAULT_EMAIL_DOMAIN, DEFAULT_LEDGER_PATH, DEFAULT_TENURE,
};

/// Configuration file name looked up in the root directory
pub const CONFIG_FILE: &str = "facpref.toml";

impl FacprefConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FacprefConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `facpref.toml` from `root`, or the defaults when it does not exist
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Data directory resolved against `root`
    pub fn data_dir_in(&self, root: &Path) -> PathBuf {
        resolve(root, &self.data_dir)
    }

    /// Ledger path resolved against `root`
    pub fn ledger_path_in(&self, root: &Path) -> PathBuf {
        resolve(root, &self.ledger_path)
    }

    /// The e-mail domain as it appears in file names (`dsu.edu` -> `dsu_edu`)
    pub fn domain_fragment(&self) -> String {
        self.email_domain.to_lowercase().replace('.', "_")
    }

    /// First label of the e-mail domain (`dsu.edu` -> `dsu`)
    pub fn domain_label(&self) -> String {
        self.domain_fragment()
            .split('_')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = FacprefConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.policy.default_tenure, 10);
        assert_eq!(config.ledger.flush, FlushPolicy::EveryAppend);
        assert_eq!(config.domain_fragment(), "dsu_edu");
        assert_eq!(config.domain_label(), "dsu");
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = FacprefConfig::default();
        config.policy.default_tenure = 3;
        config.ledger.flush = FlushPolicy::OnFinish;
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = FacprefConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "email_domain = \"example.org\"\n\n[ledger]\nflush = \"on-finish\"\n",
        )
        .unwrap();

        let config = FacprefConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.domain_fragment(), "example_org");
        assert_eq!(config.ledger.flush, FlushPolicy::OnFinish);
        assert_eq!(config.policy.default_tenure, DEFAULT_TENURE);
        assert_eq!(config.ledger_path, PathBuf::from(DEFAULT_LEDGER_PATH));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = FacprefConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, FacprefConfig::default());
        assert_eq!(config.data_dir_in(dir.path()), dir.path().join("data"));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let dir = tempdir().unwrap();
        let config = FacprefConfig {
            ledger_path: dir.path().join("out.csv"),
            ..FacprefConfig::default()
        };
        assert_eq!(
            config.ledger_path_in(Path::new("/elsewhere")),
            dir.path().join("out.csv")
        );
    }
}
