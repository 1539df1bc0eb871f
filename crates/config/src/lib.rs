#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! Client configuration from command line arguments and config file

pub mod args;
pub mod file;

use std::{path::PathBuf, time::Duration};

use args::{AppMode, ArgsConfig};
use error_stack::{Result, ResultExt};
use file::ConfigFile;
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum GetConfigError {
    #[error("Get working directory error")]
    GetWorkingDir,
    #[error("Load config file")]
    LoadConfig,
    #[error("Invalid configuration")]
    InvalidConfiguration,
}

/// Login credentials given as arguments.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<hidden>")
            .finish()
    }
}

/// Config which is read only after startup.
#[derive(Debug, Clone)]
pub struct Config {
    file: ConfigFile,
    config_dir: PathBuf,
    api_url: Url,
    credentials: Option<Credentials>,
    mode: AppMode,
}

impl Config {
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.file.api.user_agent.as_deref()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.file.api.request_timeout_seconds.into())
    }

    pub fn per_page(&self) -> u32 {
        self.file.list.per_page
    }

    /// Write timestamp to log messages. Enabled by default.
    pub fn log_timestamp(&self) -> bool {
        self.file.general.log_timestamp.unwrap_or(true)
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }
}

pub fn get_config(args: ArgsConfig) -> Result<Config, GetConfigError> {
    let config_dir = match args.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir().change_context(GetConfigError::GetWorkingDir)?,
    };

    let file = ConfigFile::load(&config_dir).change_context(GetConfigError::LoadConfig)?;

    let api_url = args.api_url.unwrap_or_else(|| file.api.url.clone());
    if !matches!(api_url.scheme(), "http" | "https") {
        return Err(GetConfigError::InvalidConfiguration)
            .attach_printable(format!("Unsupported API URL scheme: {}", api_url.scheme()));
    }

    if file.list.per_page == 0 {
        return Err(GetConfigError::InvalidConfiguration)
            .attach_printable("list.per_page must be larger than zero");
    }

    if file.api.request_timeout_seconds == 0 {
        return Err(GetConfigError::InvalidConfiguration)
            .attach_printable("api.request_timeout_seconds must be larger than zero");
    }

    let credentials = match (args.email, args.password) {
        (Some(email), Some(password)) => Some(Credentials { email, password }),
        (None, None) => None,
        _ => {
            return Err(GetConfigError::InvalidConfiguration)
                .attach_printable("Both email and password are required for login");
        }
    };

    Ok(Config {
        file,
        config_dir,
        api_url,
        credentials,
        mode: args.mode,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::ArgsConfig;

    fn parse(dir: &std::path::Path, extra: &[&str]) -> ArgsConfig {
        let mut args = vec!["civic-report", "--config-dir", dir.to_str().unwrap()];
        args.extend_from_slice(extra);
        ArgsConfig::parse_from(args)
    }

    #[test]
    fn api_url_argument_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = parse(
            dir.path(),
            &["--api-url", "https://reports.example.com/", "stats"],
        );
        let config = get_config(args).unwrap();
        assert_eq!(config.api_url().as_str(), "https://reports.example.com/");
        assert_eq!(config.per_page(), file::DEFAULT_PER_PAGE);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn email_without_password_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let args = parse(dir.path(), &["--email", "a@example.com", "stats"]);
        let error = get_config(args).unwrap_err();
        assert!(matches!(
            error.current_context(),
            GetConfigError::InvalidConfiguration
        ));
    }

    fn write_config_file(dir: &std::path::Path, text: &str) {
        std::fs::write(dir.join(file::CONFIG_FILE_NAME), text).unwrap();
    }

    fn assert_invalid(dir: &std::path::Path, extra: &[&str]) {
        let error = get_config(parse(dir, extra)).unwrap_err();
        assert!(matches!(
            error.current_context(),
            GetConfigError::InvalidConfiguration
        ));
    }

    #[test]
    fn unsupported_url_scheme_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert_invalid(dir.path(), &["--api-url", "ftp://reports.example.com", "stats"]);

        write_config_file(dir.path(), "[api]\nurl = \"file:///tmp/api\"\n");
        assert_invalid(dir.path(), &["stats"]);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config_file(
            dir.path(),
            "[api]\nurl = \"http://127.0.0.1:8000\"\n\n[list]\nper_page = 0\n",
        );
        assert_invalid(dir.path(), &["stats"]);
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config_file(
            dir.path(),
            "[api]\nurl = \"http://127.0.0.1:8000\"\nrequest_timeout_seconds = 0\n",
        );
        assert_invalid(dir.path(), &["stats"]);
    }

    #[test]
    fn values_from_config_file_are_used() {
        let dir = tempfile::tempdir().unwrap();
        write_config_file(
            dir.path(),
            "[api]\nurl = \"https://reports.example.com\"\nrequest_timeout_seconds = 5\n\n[list]\nper_page = 50\n",
        );
        let config = get_config(parse(dir.path(), &["stats"])).unwrap();
        assert_eq!(config.api_url().as_str(), "https://reports.example.com/");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.per_page(), 50);
    }

    #[test]
    fn credentials_debug_output_hides_password() {
        let credentials = Credentials {
            email: "a@example.com".to_string(),
            password: "secret".to_string(),
        };
        let text = format!("{credentials:?}");
        assert!(text.contains("a@example.com"));
        assert!(!text.contains("secret"));
    }
}
