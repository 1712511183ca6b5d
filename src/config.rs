use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

/// Where to listen and which dataset to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl ServerConfig {
    /// Defaults, overridden by `LAUNCH_DASH_HOST`, `LAUNCH_DASH_PORT` and
    /// `LAUNCH_DASH_DATA` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("LAUNCH_DASH_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("LAUNCH_DASH_PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(e) => log::warn!(
                    "Ignoring LAUNCH_DASH_PORT={port:?} ({e}); using {}",
                    config.port
                ),
            }
        }
        if let Some(path) = lookup("LAUNCH_DASH_DATA") {
            config.data_path = PathBuf::from(path);
        }
        config
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
