//! Configuration for Products API

use core_config::{
    app_info, env_or_default, env_parse_or, server::ServerConfig, AppInfo, ConfigError, FromEnv,
    StoreBackend,
};
use database::mongodb::MongoConfig;
use database::postgres::PostgresConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Connection settings for the selected backing store
#[derive(Clone, Debug)]
pub enum StoreConfig {
    MongoDb(MongoConfig),
    Postgres(PostgresConfig),
}

impl StoreConfig {
    pub fn backend(&self) -> StoreBackend {
        match self {
            StoreConfig::MongoDb(_) => StoreBackend::MongoDb,
            StoreConfig::Postgres(_) => StoreBackend::Postgres,
        }
    }
}

impl FromEnv for StoreConfig {
    /// Only the selected backend's variables are read
    fn from_env() -> Result<Self, ConfigError> {
        Ok(match StoreBackend::from_env()? {
            StoreBackend::MongoDb => StoreConfig::MongoDb(MongoConfig::from_env()?),
            StoreBackend::Postgres => StoreConfig::Postgres(PostgresConfig::from_env()?),
        })
    }
}

/// Location of the companion users-api service
#[derive(Clone, Debug)]
pub struct UsersApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl FromEnv for UsersApiConfig {
    /// Reads from environment variables:
    /// - USERS_API_URL: defaults to `http://users-api:4001`
    /// - USERS_API_TIMEOUT_SECS: defaults to 5
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("USERS_API_URL", "http://users-api:4001")
            .trim_end_matches('/')
            .to_string();
        let timeout_secs: u64 = env_parse_or("USERS_API_TIMEOUT_SECS", "5")?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreConfig,
    pub users_api: UsersApiConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let store = StoreConfig::from_env()?;
        let users_api = UsersApiConfig::from_env()?;

        Ok(Self {
            app: app_info!("products-api"),
            server,
            environment,
            store,
            users_api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE_VARS: [(&str, Option<&str>); 6] = [
        ("STORE_BACKEND", None),
        ("MONGODB_URL", None),
        ("MONGO_URL", None),
        ("DATABASE_URL_MONGO", None),
        ("MONGODB_DATABASE", None),
        ("DATABASE_URL", None),
    ];

    #[test]
    fn test_defaults() {
        let mut vars = STORE_VARS.to_vec();
        vars[1] = ("MONGODB_URL", Some("mongodb://localhost:27017"));
        vars.extend([
            ("PORT", None),
            ("USERS_API_URL", None),
            ("USERS_API_TIMEOUT_SECS", None),
        ]);

        temp_env::with_vars(vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "products-api");
            assert_eq!(config.server.port, 4002);
            assert_eq!(config.users_api.base_url, "http://users-api:4001");
            assert_eq!(config.users_api.timeout, Duration::from_secs(5));
            assert_eq!(config.store.backend(), StoreBackend::MongoDb);
        });
    }

    #[test]
    fn test_users_api_url_trailing_slash_is_trimmed() {
        temp_env::with_vars(
            [
                ("USERS_API_URL", Some("http://localhost:4001/")),
                ("USERS_API_TIMEOUT_SECS", Some("2")),
            ],
            || {
                let users = UsersApiConfig::from_env().unwrap();
                assert_eq!(users.base_url, "http://localhost:4001");
                assert_eq!(users.timeout, Duration::from_secs(2));
            },
        );
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        temp_env::with_var("USERS_API_TIMEOUT_SECS", Some("soon"), || {
            assert!(UsersApiConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_mongo_requires_url() {
        temp_env::with_vars(STORE_VARS, || {
            assert!(matches!(
                StoreConfig::from_env(),
                Err(ConfigError::MissingEnvVar(_))
            ));
        });
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let mut vars = STORE_VARS.to_vec();
        vars[0] = ("STORE_BACKEND", Some("postgres"));

        temp_env::with_vars(vars, || {
            assert!(StoreConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_postgres_backend() {
        temp_env::with_vars(
            [
                ("STORE_BACKEND", Some("postgresql")),
                ("DATABASE_URL", Some("postgres://app:secret@db:5432/products")),
            ],
            || {
                let store = StoreConfig::from_env().unwrap();
                match store {
                    StoreConfig::Postgres(pg) => {
                        assert_eq!(pg.url(), "postgres://app:secret@db:5432/products")
                    }
                    other => panic!("unexpected store config: {:?}", other),
                }
            },
        );
    }

    #[test]
    fn test_mongo_legacy_url_variable() {
        let mut vars = STORE_VARS.to_vec();
        vars[3] = ("DATABASE_URL_MONGO", Some("mongodb://mongo:27017"));

        temp_env::with_vars(vars, || match StoreConfig::from_env().unwrap() {
            StoreConfig::MongoDb(mongo) => {
                assert_eq!(mongo.url(), "mongodb://mongo:27017");
                assert_eq!(mongo.database(), "productsdb");
            }
            other => panic!("unexpected store config: {:?}", other),
        });
    }
}
