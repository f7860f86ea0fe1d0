use crate::error::ScanError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub readme: ReadmeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_raw_base")]
    pub raw_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeConfig {
    #[serde(default = "default_branches")]
    pub branches: Vec<String>,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_raw_base() -> String {
    "https://raw.githubusercontent.com".to_string()
}

fn default_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            readme: ReadmeConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            api_base: default_api_base(),
            raw_base: default_raw_base(),
        }
    }
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            branches: default_branches(),
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.http.timeout_secs == 0 || self.http.timeout_secs > 60 {
            return Err(ScanError::ConfigParse(format!(
                "http.timeout_secs must be between 1 and 60 (found {})",
                self.http.timeout_secs
            )));
        }
        if self.http.api_base.trim().is_empty() {
            return Err(ScanError::ConfigParse(
                "http.api_base cannot be empty".to_string(),
            ));
        }
        if self.http.raw_base.trim().is_empty() {
            return Err(ScanError::ConfigParse(
                "http.raw_base cannot be empty".to_string(),
            ));
        }
        if self.readme.branches.is_empty() {
            return Err(ScanError::ConfigParse(
                "readme.branches cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
