mod settings;

pub use settings::{CorsSettings, LlmSettings, ServerSettings, Settings, SettingsError};
