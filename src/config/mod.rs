pub mod settings;

pub use settings::{GeneralConfig, InspectConfig, Settings, TelemetryConfig, CONFIG_FILE_ENV, ENV_PREFIX};
