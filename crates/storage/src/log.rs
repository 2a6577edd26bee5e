use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};
use treino_domain::StorageError;

use crate::{Backend, Collection};

/// Number of entries kept in the log collection.
pub const CAPACITY: usize = 100;

static SINK: Mutex<Option<Arc<Mutex<dyn Sink>>>> = Mutex::new(None);
static LOGGER: Logger = Logger;

/// Destination of the records captured by the application logger.
pub trait Sink: Send + 'static {
    fn write_entry(&mut self, entry: Entry) -> Result<(), StorageError>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelName")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelName {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Adds an entry in front of `entries`, dropping the oldest ones beyond [`CAPACITY`].
pub fn push_entry(entries: &mut VecDeque<Entry>, entry: Entry) {
    entries.push_front(entry);
    entries.truncate(CAPACITY);
}

/// Keeps the most recent log entries in the log collection of a backend.
#[derive(Debug, Default)]
pub struct LogStore<B> {
    backend: B,
}

impl<B: Backend> LogStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Newest entry first.
    pub fn read_entries(&self) -> Result<VecDeque<Entry>, StorageError> {
        Ok(self.backend.get_all(Collection::Log)?.unwrap_or_default())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.save_all(Collection::Log, &VecDeque::<Entry>::new())
    }
}

impl<B: Backend + Send + 'static> Sink for LogStore<B> {
    fn write_entry(&mut self, entry: Entry) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        push_entry(&mut entries, entry);
        self.backend.save_all(Collection::Log, &entries)
    }
}

/// Routes all records up to debug level into `sink`.
///
/// # Errors
///
/// Returns an error if a logger has already been initialized.
pub fn init(sink: Arc<Mutex<dyn Sink>>) -> Result<(), SetLoggerError> {
    if let Ok(mut current) = SINK.lock() {
        *current = Some(sink);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(sink) = SINK.lock().ok().and_then(|current| current.clone()) else {
            return;
        };
        let Ok(mut sink) = sink.lock() else {
            return;
        };
        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };
        let _ = sink.write_entry(entry);
    }

    fn flush(&self) {}
}
