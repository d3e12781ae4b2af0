use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Allowed CORS origins for a separately served frontend.
    /// Set SUPPORT_PORTAL__API__CORS_ALLOWED_ORIGINS in production.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    #[serde(default = "default_jwt_expiry")]
    pub jwt_expiry_hours: u64,
}

fn default_bind() -> String { "0.0.0.0".to_string() }
fn default_api_port() -> u16 { 5000 }
fn default_db_path() -> String { "./supportportal.db".to_string() }
fn default_jwt_expiry() -> u64 { 24 }
fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:5000".to_string(),
    ]
}

const DEFAULT_JWT_SECRET: &str = "change-me-in-production";
const MIN_SECRET_LEN: usize = 32;

pub fn validate(cfg: &Config) -> Result<()> {
    if cfg.auth.jwt_secret == DEFAULT_JWT_SECRET {
        anyhow::bail!(
            "SECURITY ERROR: secret key must be changed from default value '{}'. \
            Set SUPPORT_PORTAL__AUTH__JWT_SECRET environment variable with a strong random value.",
            DEFAULT_JWT_SECRET
        );
    }

    if cfg.auth.jwt_secret.len() < MIN_SECRET_LEN {
        anyhow::bail!(
            "CONFIG ERROR: secret key must be at least {} characters (current: {})",
            MIN_SECRET_LEN,
            cfg.auth.jwt_secret.len()
        );
    }

    if cfg.database.path != ":memory:" {
        if let Some(parent) = std::path::Path::new(&cfg.database.path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                anyhow::bail!(
                    "CONFIG ERROR: Database directory does not exist: {}",
                    parent.display()
                );
            }
        }
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}

pub fn load() -> Result<Config> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(
            config::Environment::with_prefix("SUPPORT_PORTAL")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("api.cors_allowed_origins")
                .try_parsing(true),
        )
        .set_default("api.bind", "0.0.0.0")?
        .set_default("api.port", 5000)?
        .set_default("database.path", "./supportportal.db")?
        .set_default("auth.jwt_secret", DEFAULT_JWT_SECRET)?
        .set_default("auth.jwt_expiry_hours", 24)?
        .build()?
        .try_deserialize()?;

    validate(&cfg)?;

    Ok(cfg)
}
