use anyhow::Result;
use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_file: Option<String>,
    pub payment: PaymentConfig,
    pub query: QueryConfig,
}

/// Settings for the card payment test API
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub api_base: String,
    pub publishable_key: String,
    pub client_secret: String,
}

/// Query cache timings. Defaults match a stock request-caching client:
/// data goes stale immediately and unused entries live for five minutes.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub stale_time: Duration,
    pub gc_time: Duration,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.stripe.com".to_string(),
            publishable_key: "pk_test_your_publishable_key".to_string(),
            client_secret: "client_secret_test".to_string(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::ZERO,
            gc_time: Duration::from_secs(300),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3043,
            log_level: "info".to_string(),
            log_file: None,
            payment: PaymentConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration from environment variables, reading `.env` first
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.port,
        };

        let payment = PaymentConfig {
            api_base: env::var("PAYMENT_API_BASE").unwrap_or(defaults.payment.api_base),
            publishable_key: env::var("PAYMENT_PUBLISHABLE_KEY")
                .unwrap_or(defaults.payment.publishable_key),
            client_secret: env::var("PAYMENT_CLIENT_SECRET")
                .unwrap_or(defaults.payment.client_secret),
        };

        let query = QueryConfig {
            stale_time: seconds_from_env("QUERY_STALE_SECS")?
                .unwrap_or(defaults.query.stale_time),
            gc_time: seconds_from_env("QUERY_GC_SECS")?.unwrap_or(defaults.query.gc_time),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: env::var("LOG_FILE").ok().filter(|path| !path.is_empty()),
            payment,
            query,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn seconds_from_env(key: &str) -> Result<Option<Duration>> {
    match env::var(key) {
        Ok(value) => Ok(Some(Duration::from_secs(value.parse()?))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_test_payment_api() {
        let config = AppConfig::default();
        assert_eq!(config.server_address(), "0.0.0.0:3043");
        assert_eq!(config.payment.client_secret, "client_secret_test");
        assert_eq!(config.query.stale_time, Duration::ZERO);
        assert_eq!(config.query.gc_time, Duration::from_secs(300));
    }
}
