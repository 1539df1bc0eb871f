use std::{
    io::Write,
    path::{Path, PathBuf},
};

use error_stack::{Report, Result, ResultExt};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_FILE_NAME: &str = "civic_report.toml";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u16 = 15;
pub const DEFAULT_PER_PAGE: u32 = 20;

pub const DEFAULT_CONFIG_FILE_TEXT: &str = r#"

[api]
url = "http://127.0.0.1:8000"
# user_agent = "civic-report"
# request_timeout_seconds = 15

# [general]
# log_timestamp = true

# [list]
# per_page = 20

"#;

#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("Save default")]
    SaveDefault,
    #[error("Not a directory")]
    NotDirectory,
    #[error("Load config file")]
    LoadConfig,
    #[error("Saving config file failed")]
    Save,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigFile {
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub list: ListConfig,
}

impl ConfigFile {
    pub fn load(dir: impl AsRef<Path>) -> Result<ConfigFile, ConfigFileError> {
        let config_string =
            ConfigFileUtils::load_string(dir, CONFIG_FILE_NAME, DEFAULT_CONFIG_FILE_TEXT)?;
        toml::from_str(&config_string).change_context(ConfigFileError::LoadConfig)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub url: Url,
    /// User agent header value. Default contains the client version.
    pub user_agent: Option<String>,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u16,
}

fn default_request_timeout_seconds() -> u16 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Write timestamp to log messages. Enabled by default.
    pub log_timestamp: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListConfig {
    pub per_page: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

pub struct ConfigFileUtils;

impl ConfigFileUtils {
    pub fn save_string(file_path: impl AsRef<Path>, text: &str) -> Result<(), ConfigFileError> {
        let mut file = std::fs::File::create(file_path).change_context(ConfigFileError::Save)?;
        file.write_all(text.as_bytes())
            .change_context(ConfigFileError::Save)?;
        Ok(())
    }

    pub fn join_dir_path_and_file_name(
        dir: impl AsRef<Path>,
        file_name: &str,
    ) -> Result<PathBuf, ConfigFileError> {
        if !dir.as_ref().is_dir() {
            return Err(Report::new(ConfigFileError::NotDirectory))
                .attach_printable(dir.as_ref().display().to_string());
        }
        Ok(dir.as_ref().join(file_name))
    }

    /// Load file to string. If the file does not exist, it is created
    /// with the default content first.
    pub fn load_string(
        dir: impl AsRef<Path>,
        file_name: &str,
        default: &str,
    ) -> Result<String, ConfigFileError> {
        let file_path = Self::join_dir_path_and_file_name(&dir, file_name)
            .change_context(ConfigFileError::LoadConfig)?;
        if !file_path.exists() {
            Self::save_string(&file_path, default).change_context(ConfigFileError::SaveDefault)?;
        }

        std::fs::read_to_string(&file_path).change_context(ConfigFileError::LoadConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_is_created_and_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile::load(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(config.api.url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.api.request_timeout_seconds, DEFAULT_REQUEST_TIMEOUT_SECONDS);
        assert_eq!(config.list.per_page, DEFAULT_PER_PAGE);
        assert_eq!(config.general.log_timestamp, None);
    }

    #[test]
    fn existing_config_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let text = r#"
            [api]
            url = "https://reports.example.com"
            user_agent = "test-agent"
            request_timeout_seconds = 3
            [general]
            log_timestamp = false
            [list]
            per_page = 5
        "#;
        ConfigFileUtils::save_string(dir.path().join(CONFIG_FILE_NAME), text).unwrap();
        let config = ConfigFile::load(dir.path()).unwrap();
        assert_eq!(config.api.url.as_str(), "https://reports.example.com/");
        assert_eq!(config.api.user_agent.as_deref(), Some("test-agent"));
        assert_eq!(config.api.request_timeout_seconds, 3);
        assert_eq!(config.general.log_timestamp, Some(false));
        assert_eq!(config.list.per_page, 5);
    }

    #[test]
    fn missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let error = ConfigFile::load(&missing).unwrap_err();
        assert!(matches!(error.current_context(), ConfigFileError::LoadConfig));
    }
}
