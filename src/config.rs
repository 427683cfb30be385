use std::env;

use crate::error::{PixgenError, Result};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Settings for the upstream image service. The service is only ever
/// addressed by URL; nothing here is used to open a connection.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub nologo: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: None,
            port: None,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").ok();
        let port = parse_env("PORT")?;

        Ok(ServerConfig { host, port })
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Bind address with defaults applied.
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host
                .clone()
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            self.port.unwrap_or(8080),
        )
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            base_url: None,
            width: None,
            height: None,
            nologo: None,
        }
    }
}

impl UpstreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Result<Self> {
        let base_url = env::var("UPSTREAM_BASE_URL").ok();
        let width = parse_env("IMAGE_WIDTH")?;
        let height = parse_env("IMAGE_HEIGHT")?;
        let nologo = env::var("IMAGE_NOLOGO").ok().map(|val| val == "true");

        Ok(UpstreamConfig {
            base_url,
            width,
            height,
            nologo,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_nologo(mut self, nologo: bool) -> Self {
        self.nologo = Some(nologo);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Result<Self> {
        Ok(Config {
            server: ServerConfig::from_env()?,
            upstream: UpstreamConfig::from_env()?,
        })
    }

    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.server = server;
        self
    }

    pub fn with_upstream(mut self, upstream: UpstreamConfig) -> Self {
        self.upstream = upstream;
        self
    }
}

/// A variable that is present but unparsable is a configuration mistake,
/// reported at boot rather than silently replaced with a default.
fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| PixgenError::ConfigError(format!("invalid {} value: {}", name, raw))),
        Err(_) => Ok(None),
    }
}
