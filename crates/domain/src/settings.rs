use crate::{ReadError, Reps, Sets, UpdateError};

pub trait SettingsService {
    fn get_settings(&self) -> Result<UserSettings, ReadError>;
    fn set_settings(&self, settings: UserSettings) -> Result<UserSettings, UpdateError>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<UserSettings, ReadError>;
    fn write_settings(&self, settings: UserSettings) -> Result<UserSettings, UpdateError>;
}

/// Defaults used to prefill new exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettings {
    pub default_sets: Sets,
    pub default_reps: Reps,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            default_sets: Sets::DEFAULT,
            default_reps: Reps::default(),
        }
    }
}
