use crate::{env_or_default, ConfigError, FromEnv};
use strum::{Display, EnumString, IntoStaticStr};

/// Backing store selected for the products collection
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum StoreBackend {
    /// Document store (MongoDB), ids are ObjectId hex strings
    #[default]
    #[strum(to_string = "mongodb", serialize = "mongo")]
    MongoDb,
    /// Relational store (PostgreSQL), ids are auto-incrementing integers
    #[strum(to_string = "postgres", serialize = "postgresql")]
    Postgres,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl FromEnv for StoreBackend {
    /// Reads `STORE_BACKEND`, defaulting to `mongodb`
    fn from_env() -> Result<Self, ConfigError> {
        let value = env_or_default("STORE_BACKEND", "mongodb");
        value
            .trim()
            .parse()
            .map_err(|_: strum::ParseError| ConfigError::ParseError {
                key: "STORE_BACKEND".to_string(),
                details: format!(
                    "unknown store backend '{}', expected 'mongodb' or 'postgres'",
                    value.trim()
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_defaults_to_mongodb() {
        temp_env::with_var_unset("STORE_BACKEND", || {
            let backend = StoreBackend::from_env().unwrap();
            assert_eq!(backend, StoreBackend::MongoDb);
        });
    }

    #[test]
    fn test_store_backend_postgres_aliases() {
        for value in ["postgres", "PostgreSQL", " postgres "] {
            temp_env::with_var("STORE_BACKEND", Some(value), || {
                assert_eq!(StoreBackend::from_env().unwrap(), StoreBackend::Postgres);
            });
        }
    }

    #[test]
    fn test_store_backend_mongo_alias() {
        temp_env::with_var("STORE_BACKEND", Some("mongo"), || {
            assert_eq!(StoreBackend::from_env().unwrap(), StoreBackend::MongoDb);
        });
    }

    #[test]
    fn test_store_backend_unknown_value() {
        temp_env::with_var("STORE_BACKEND", Some("sqlite"), || {
            let err = StoreBackend::from_env().unwrap_err();
            assert!(err.to_string().contains("STORE_BACKEND"));
            assert!(err.to_string().contains("sqlite"));
        });
    }

    #[test]
    fn test_store_backend_display() {
        assert_eq!(StoreBackend::MongoDb.to_string(), "mongodb");
        assert_eq!(StoreBackend::Postgres.to_string(), "postgres");
        assert_eq!(StoreBackend::Postgres.as_str(), "postgres");
    }

    #[test]
    fn test_store_backend_from_str() {
        assert_eq!("MONGO".parse::<StoreBackend>().unwrap(), StoreBackend::MongoDb);
        assert_eq!("postgresql".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }
}
