use crate::{env_or_default, env_parse_or, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Port the products service listens on unless `PORT` says otherwise
pub const DEFAULT_PORT: u16 = 4002;

/// Listener settings for an HTTP service
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Bind address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` (all interfaces by default) and `PORT` (4002 by default)
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse_or("PORT", &DEFAULT_PORT.to_string())?;

        Ok(Self::new(host, port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_listen_on_all_interfaces() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", None::<&str>)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:4002");
        });
    }

    #[test]
    fn test_port_override() {
        temp_env::with_vars(
            [("HOST", Some("127.0.0.1")), ("PORT", Some("5002"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:5002");
            },
        );
    }

    #[test]
    fn test_bad_ports_are_parse_errors() {
        for bad in ["http", "70000", "-1"] {
            temp_env::with_var("PORT", Some(bad), || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(
                    matches!(err, ConfigError::ParseError { ref key, .. } if key == "PORT"),
                    "{bad}"
                );
            });
        }
    }

    #[test]
    fn test_default_matches_env_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, "0.0.0.0");
    }
}
