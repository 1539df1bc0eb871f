pub const DEFAULT_BASE_PATH: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Configuration {
    pub base_path: String,
    pub user_agent: Option<String>,
    pub client: reqwest::Client,
    pub bearer_access_token: Option<String>,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: DEFAULT_BASE_PATH.to_owned(),
            user_agent: Some(concat!("civic-report/", env!("CARGO_PKG_VERSION")).to_owned()),
            client: reqwest::Client::new(),
            bearer_access_token: None,
        }
    }
}
