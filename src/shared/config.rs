use chrono_tz::Tz;
use log::warn;
use std::path::PathBuf;

/// Fallback scheduling timezone when `FIELDBOOK_TIMEZONE` is unset or bad.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Application configuration, loaded from the environment.
///
/// The timezone only affects how calendar days are partitioned for the slot
/// grid; all stored timestamps stay in UTC.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub timezone: Tz,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let timezone = match std::env::var("FIELDBOOK_TIMEZONE") {
            Ok(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                warn!("Unknown timezone '{}', falling back to {}", name, DEFAULT_TIMEZONE);
                DEFAULT_TIMEZONE
            }),
            Err(_) => DEFAULT_TIMEZONE,
        };

        let data_dir = std::env::var("FIELDBOOK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Self { timezone, data_dir }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            data_dir: PathBuf::from("data"),
        }
    }
}
