mod settings;

pub use settings::{
    GradingSettings, LoggingSettings, ServerSettings, Settings, SettingsError,
    TranscriptionSettings,
};
