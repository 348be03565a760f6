//! Configuration for the resume screener
//!
//! Everything runtime-tunable arrives through CLI flags; the only
//! environment-sourced value is the web session secret.

/// Fallback secret for local development. Deployments must override
/// `SESSION_SECRET`.
const DEV_SECRET: &str = "devsecret";

#[derive(Debug, Clone)]
pub struct Config {
    pub session_secret: String,
}

impl Config {
    /// Load configuration from the environment (reading `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let session_secret = std::env::var("SESSION_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEV_SECRET.to_string());

        Self { session_secret }
    }

    /// True while running on the hardcoded development secret.
    pub fn uses_default_secret(&self) -> bool {
        self.session_secret == DEV_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_secret_is_flagged() {
        let config = Config {
            session_secret: DEV_SECRET.to_string(),
        };
        assert!(config.uses_default_secret());

        let config = Config {
            session_secret: "s3cr3t".to_string(),
        };
        assert!(!config.uses_default_secret());
    }
}
