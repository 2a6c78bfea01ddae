//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tenure assumed for faculty whose survey export carries no tenure value
pub const DEFAULT_TENURE: i64 = 10;

/// Directory holding the survey CSV exports
pub const DEFAULT_DATA_DIR: &str = "data";

/// Ledger location; kept below a subdirectory so the `*.csv` report never reads it
pub const DEFAULT_LEDGER_PATH: &str = "data/ledger/professors_worksheet.csv";

/// Institutional e-mail domain shared by all faculty ids
pub const DEFAULT_EMAIL_DOMAIN: &str = "dsu.edu";

/// Top-level facpref configuration (`facpref.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacprefConfig {
    /// Directory containing the preference CSV files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Output path of the weight ledger
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,

    /// E-mail domain used in preference file names (`dsu.edu` -> `dsu_edu`)
    #[serde(default = "default_email_domain")]
    pub email_domain: String,

    /// Weighting policy
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Ledger durability
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Policy defaults fed into weight resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Tenure used when a row or file has none
    #[serde(default = "default_tenure")]
    pub default_tenure: i64,
}

/// Ledger store settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub flush: FlushPolicy,
}

/// When accepted ledger rows reach disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlushPolicy {
    /// Every successful append is written before `append` returns
    #[default]
    EveryAppend,
    /// Rows are buffered until an explicit flush
    OnFinish,
}

impl Default for FacprefConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            ledger_path: default_ledger_path(),
            email_domain: default_email_domain(),
            policy: PolicyConfig::default(),
            ledger: LedgerConfig::default(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_tenure: default_tenure(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_PATH)
}

fn default_email_domain() -> String {
    DEFAULT_EMAIL_DOMAIN.to_string()
}

fn default_tenure() -> i64 {
    DEFAULT_TENURE
}
