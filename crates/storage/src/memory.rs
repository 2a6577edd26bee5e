use std::{cell::RefCell, collections::BTreeMap};

use serde::{Serialize, de::DeserializeOwned};
use treino_domain::StorageError;

use crate::{Backend, Collection};

/// Backend keeping the serialized collections in memory.
#[derive(Debug, Default)]
pub struct Memory {
    collections: RefCell<BTreeMap<Collection, String>>,
}

impl Backend for Memory {
    fn get_all<V: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Option<V>, StorageError> {
        self.collections
            .borrow()
            .get(&collection)
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    fn save_all<V: Serialize>(&self, collection: Collection, value: &V) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.collections.borrow_mut().insert(collection, json);
        Ok(())
    }
}
