use std::env;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(AppError::MissingDatabaseUrl)?;
        let run_migrations = match lookup("SEED_RUN_MIGRATIONS") {
            Some(value) => parse_flag("SEED_RUN_MIGRATIONS", &value)?,
            None => true,
        };
        Ok(Self {
            database_url,
            run_migrations,
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AppError::InvalidConfig {
            key,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_database_url() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(AppError::MissingDatabaseUrl)));
    }

    #[test]
    fn test_blank_database_url() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "   ")]));
        assert!(matches!(result, Err(AppError::MissingDatabaseUrl)));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite://app.db")]))
            .expect("config should parse");
        assert_eq!(config.database_url, "sqlite://app.db");
        assert!(config.run_migrations);
    }

    #[test]
    fn test_run_migrations_flag() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://app.db"),
            ("SEED_RUN_MIGRATIONS", "No"),
        ]))
        .expect("config should parse");
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_invalid_run_migrations_flag() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://app.db"),
            ("SEED_RUN_MIGRATIONS", "maybe"),
        ]));
        match result {
            Err(AppError::InvalidConfig { key, value }) => {
                assert_eq!(key, "SEED_RUN_MIGRATIONS");
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
