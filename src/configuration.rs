use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub auth: AuthSettings,
    pub locale: LocaleSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthSettings {
    pub secret: String,
    pub token_ttl_seconds: i64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LocaleSettings {
    pub default_locale: String,
}

impl AuthSettings {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let secret = std::env::var("AUTH_SECRET")
            .map_err(|_| config::ConfigError::NotFound("AUTH_SECRET".to_string()))?;
        let token_ttl_seconds = std::env::var("AUTH_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(36_000);

        Ok(AuthSettings {
            secret,
            token_ttl_seconds,
        })
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Configuration lives in a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    let mut config: Settings = settings.try_deserialize()?;

    // The signing secret from the environment wins over the file
    if let Ok(auth) = AuthSettings::from_env() {
        config.auth = auth;
    }

    Ok(config)
}
