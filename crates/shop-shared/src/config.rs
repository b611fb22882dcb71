//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_MAX_UPLOAD_BYTES, MIN_JWT_SECRET_LENGTH};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub upload: UploadSettings,
    pub cors: CorsSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub bootstrap: BootstrapSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    /// Seconds
    pub access_token_expiry: i64,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    pub dir: String,
    pub max_size_bytes: usize,
    /// URL prefix the stored files are served under
    pub public_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    /// Empty means permissive (development only)
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
    pub directory: Option<String>,
}

#[derive(Deserialize, Clone, Default)]
pub struct BootstrapSettings {
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl std::fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("SHOP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Builder pre-populated with every default; `jwt.secret` has none on purpose.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 5000)?
            .set_default("app.name", "shop-server")?
            .set_default("database.url", "sqlite://shop.db")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.access_token_expiry", DEFAULT_ACCESS_TOKEN_EXPIRY)?
            .set_default("upload.dir", "uploads")?
            .set_default("upload.max_size_bytes", DEFAULT_MAX_UPLOAD_BYTES as i64)?
            .set_default("upload.public_path", "/uploads")?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("logging.level", "info")?
            .set_default("logging.json", true)
    }

    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let settings: AppConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::InvalidConfig(format!(
                "jwt.secret must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if self.jwt.access_token_expiry <= 0 {
            return Err(AppError::InvalidConfig("jwt.access_token_expiry must be positive".into()));
        }
        if self.upload.max_size_bytes == 0 {
            return Err(AppError::InvalidConfig("upload.max_size_bytes must be positive".into()));
        }
        if !self.upload.public_path.starts_with('/') {
            return Err(AppError::InvalidConfig("upload.public_path must start with '/'".into()));
        }
        match (&self.bootstrap.admin_username, &self.bootstrap.admin_password) {
            (Some(_), None) | (None, Some(_)) => Err(AppError::InvalidConfig(
                "bootstrap.admin_username and bootstrap.admin_password must be set together".into(),
            )),
            _ => Ok(()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<AppConfig, AppError> {
        let config = AppConfig::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        AppConfig::from_config(config)
    }

    #[test]
    fn test_defaults_fill_everything_but_secret() {
        let cfg = from_toml(
            r#"
            [jwt]
            secret = "0123456789abcdef0123456789abcdef"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.app.port, 5000);
        assert_eq!(cfg.jwt.access_token_expiry, 3600);
        assert_eq!(cfg.upload.public_path, "/uploads");
        assert!(cfg.cors.allowed_origins.is_empty());
        assert!(cfg.bootstrap.admin_username.is_none());
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        assert!(from_toml("").is_err());
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let err = from_toml(
            r#"
            [jwt]
            secret = "too-short"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_bootstrap_requires_both_fields() {
        let err = from_toml(
            r#"
            [jwt]
            secret = "0123456789abcdef0123456789abcdef"

            [bootstrap]
            admin_username = "root"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cfg = from_toml(
            r#"
            [jwt]
            secret = "0123456789abcdef0123456789abcdef"
            "#,
        )
        .unwrap();
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains("0123456789abcdef"));
    }
}
