use std::sync::{Arc, Mutex};

use gloo_storage::{Storage as GlooStorage, errors::StorageError as GlooError};
use log::SetLoggerError;
use serde::{Serialize, de::DeserializeOwned};
use treino_domain::StorageError;

use crate::{Backend, Collection, log::LogStore};

/// Browser local storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl Backend for LocalStorage {
    fn get_all<V: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Option<V>, StorageError> {
        match gloo_storage::LocalStorage::get(collection) {
            Ok(value) => Ok(Some(value)),
            Err(GlooError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    fn save_all<V: Serialize>(&self, collection: Collection, value: &V) -> Result<(), StorageError> {
        gloo_storage::LocalStorage::set(collection, value).map_err(storage_error)
    }
}

fn storage_error(err: GlooError) -> StorageError {
    match err {
        GlooError::SerdeError(err) => StorageError::Serialization(err.to_string()),
        GlooError::KeyNotFound(_) | GlooError::JsError(_) => StorageError::Unavailable,
    }
}

/// Captures the application log in local storage.
///
/// # Errors
///
/// Returns an error if a logger has already been initialized.
pub fn init_log() -> Result<(), SetLoggerError> {
    crate::log::init(Arc::new(Mutex::new(LogStore::new(LocalStorage))))
}
