use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub session_hours: i64,
    /// Artificial pause before a login attempt is answered.
    pub login_delay: Duration,
    pub response_target_minutes: f64,
    pub bcrypt_cost: u32,
    pub static_dir: String,
}

impl AppConfig {
    /// Defaults for everything except the signing secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            port: 3000,
            jwt_secret: jwt_secret.into(),
            session_hours: 24,
            login_delay: Duration::from_millis(1000),
            response_target_minutes: 5.0,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            static_dir: "static".to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        let defaults = Self::new(jwt_secret);

        Ok(Self {
            port: parse_var("PORT", defaults.port)?,
            session_hours: parse_var("SESSION_HOURS", defaults.session_hours)?,
            login_delay: Duration::from_millis(parse_var(
                "LOGIN_DELAY_MS",
                defaults.login_delay.as_millis() as u64,
            )?),
            response_target_minutes: parse_var(
                "RESPONSE_TARGET_MINUTES",
                defaults.response_target_minutes,
            )?,
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost)?,
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir.clone()),
            ..defaults
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new("secret");
        assert_eq!(config.port, 3000);
        assert_eq!(config.session_hours, 24);
        assert_eq!(config.login_delay, Duration::from_millis(1000));
        assert_eq!(config.response_target_minutes, 5.0);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("SPEEDLEAD_TEST_PORT", "not-a-port");
        let result: Result<u16, _> = parse_var("SPEEDLEAD_TEST_PORT", 3000);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
        env::remove_var("SPEEDLEAD_TEST_PORT");
    }

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        let result: Result<u32, _> = parse_var("SPEEDLEAD_TEST_UNSET", 12);
        assert_eq!(result.unwrap(), 12);
    }
}
