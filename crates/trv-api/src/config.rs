use std::env;

/// Runtime environment, selects log format among other things.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read `ENVIRONMENT`; anything other than production means development.
    pub fn from_env() -> Self {
        match env::var("ENVIRONMENT").as_deref() {
            Ok("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// CORS origin allowlist; empty means permissive (the course frontend
    /// is served from an arbitrary localhost port).
    pub allowed_origins: Vec<String>,
    pub env: Environment,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            env: Environment::from_env(),
        })
    }
}
