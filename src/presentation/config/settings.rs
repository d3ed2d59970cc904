use crate::infrastructure::asr::TranscriptionProvider;

/// Environment-driven configuration.
///
/// Missing provider API keys are deliberately not a startup error: the
/// engines surface `MissingCredential` on the first dependent call, so
/// a deployment that only uses the local engine never needs the remote
/// key at all.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub transcription: TranscriptionSettings,
    pub grading: GradingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub environment: String,
    pub json_format: bool,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub api_key: String,
    pub base_url: Option<String>,
    pub whisper_model: String,
    pub language_code: String,
}

#[derive(Debug, Clone)]
pub struct GradingSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub chat_model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),
    #[error("{0}")]
    InvalidProvider(String),
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| SettingsError::InvalidPort(raw))?,
            Err(_) => 8000,
        };

        let provider = match std::env::var("TRANSCRIPTION_PROVIDER") {
            Ok(raw) => TranscriptionProvider::parse(&raw).map_err(SettingsError::InvalidProvider)?,
            Err(_) => TranscriptionProvider::AssemblyAi,
        };

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            logging: LoggingSettings {
                environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                json_format: std::env::var("LOG_FORMAT")
                    .map(|raw| json_log_format(&raw))
                    .unwrap_or(false),
            },
            transcription: TranscriptionSettings {
                provider,
                api_key: std::env::var("ASSEMBLYAI_API_KEY").unwrap_or_default(),
                base_url: std::env::var("ASSEMBLYAI_BASE_URL").ok(),
                whisper_model: std::env::var("WHISPER_MODEL")
                    .unwrap_or_else(|_| "openai/whisper-base".to_string()),
                language_code: std::env::var("LANGUAGE_CODE").unwrap_or_else(|_| "es".to_string()),
            },
            grading: GradingSettings {
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                chat_model: std::env::var("OPENAI_CHAT_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            },
        })
    }
}

fn json_log_format(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_log_format_variants_when_parsed_then_only_json_enables_json_output() {
        assert!(json_log_format("json"));
        assert!(json_log_format("JSON"));
        assert!(!json_log_format("pretty"));
        assert!(!json_log_format(""));
    }
}
