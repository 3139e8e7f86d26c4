pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origin: Option<String>,
}

impl Settings {
    /// Reads process configuration from the environment. A missing API key
    /// is a startup error; everything else has a default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(SettingsError::MissingApiKey)?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let allowed_origin = std::env::var("FRONTEND_URL")
            .ok()
            .filter(|o| !o.trim().is_empty());

        Ok(Self {
            server: ServerSettings { host, port },
            llm: LlmSettings { api_key, model },
            cors: CorsSettings { allowed_origin },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,
}
