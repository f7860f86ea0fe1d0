use crate::error::{Result, ScanError};
use crate::types::config::ScanConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = ".config/redflag/config.toml";

pub fn load_config() -> Result<ScanConfig> {
    let path = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_CONFIG_FILE));
    load_config_from(path.as_deref())
}

pub(crate) fn load_config_from(path: Option<&Path>) -> Result<ScanConfig> {
    let Some(path) = path else {
        return Ok(ScanConfig::default());
    };
    if !path.exists() {
        return Ok(ScanConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScanError::ConfigParse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_from(Some(&dir.path().join("config.toml")))
            .expect("load should not fail");
        assert_eq!(cfg.http.timeout_secs, 10);
        assert_eq!(cfg.http.api_base, "https://api.github.com");
    }

    #[test]
    fn no_home_directory_falls_back_to_defaults() {
        let cfg = load_config_from(None).expect("load should not fail");
        assert_eq!(cfg.readme.branches, vec!["main".to_string(), "master".to_string()]);
    }

    #[test]
    fn existing_file_overrides_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[http]
timeout_secs = 5
api_base = "http://127.0.0.1:9000"

[readme]
branches = ["develop"]
"#,
        )
        .expect("config should write");

        let cfg = load_config_from(Some(&path)).expect("load should succeed");
        assert_eq!(cfg.http.timeout_secs, 5);
        assert_eq!(cfg.http.api_base, "http://127.0.0.1:9000");
        assert_eq!(cfg.http.raw_base, "https://raw.githubusercontent.com");
        assert_eq!(cfg.readme.branches, vec!["develop".to_string()]);
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[http\ntimeout_secs = 5").expect("config should write");

        let err = load_config_from(Some(&path)).expect_err("malformed config should fail");
        match err {
            ScanError::ConfigParse(message) => {
                assert!(message.contains("config.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
