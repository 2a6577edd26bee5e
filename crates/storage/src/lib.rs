#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use treino_domain::StorageError;

mod dto;
pub mod local_storage;
pub mod log;
pub mod memory;
mod repository;

pub use repository::Repository;

/// Key-value store holding one JSON document per collection.
pub trait Backend {
    /// Reads the whole collection, or `None` if nothing has been stored yet.
    fn get_all<V: DeserializeOwned>(&self, collection: Collection)
    -> Result<Option<V>, StorageError>;
    fn save_all<V: Serialize>(&self, collection: Collection, value: &V)
    -> Result<(), StorageError>;
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Collection {
    #[strum(serialize = "workouts")]
    Workouts,
    #[strum(serialize = "sessions")]
    Sessions,
    #[strum(serialize = "scheduledWorkouts")]
    ScheduledWorkouts,
    #[strum(serialize = "userSettings")]
    UserSettings,
    #[strum(serialize = "log")]
    Log,
}
