/// JSON-file record store
///
/// One pretty-printed JSON file per collection under a data directory.
/// Reads fall back to the empty collection when a file is missing or
/// corrupt: an unreadable store means "no bookings exist yet", never a
/// fatal error. Writes go through a lock so replace-all stays whole-file
/// atomic within this process.
use async_trait::async_trait;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::modules::customers::domain::entities::Customer;
use crate::modules::customers::domain::repository::CustomerStore;
use crate::modules::scheduling::domain::entities::{Appointment, Job};
use crate::modules::scheduling::domain::repository::BookingStore;
use crate::shared::errors::AppResult;

pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    fn read_collection<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        read_or_empty(&self.collection_path(name))
    }

    async fn write_collection<T: Serialize>(&self, name: &str, items: &[T]) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(items)?;
        std::fs::write(self.collection_path(name), json)?;
        Ok(())
    }
}

/// Missing or corrupt files decode as the empty collection
fn read_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str(&data) {
        Ok(items) => items,
        Err(err) => {
            warn!(
                "treating unreadable collection {} as empty: {}",
                path.display(),
                err
            );
            Vec::new()
        }
    }
}

#[async_trait]
impl BookingStore for JsonFileStore {
    async fn get_jobs(&self) -> AppResult<Vec<Job>> {
        Ok(self.read_collection("jobs"))
    }

    async fn save_jobs(&self, jobs: Vec<Job>) -> AppResult<()> {
        self.write_collection("jobs", &jobs).await
    }

    async fn get_appointments(&self) -> AppResult<Vec<Appointment>> {
        Ok(self.read_collection("appointments"))
    }

    async fn save_appointments(&self, appointments: Vec<Appointment>) -> AppResult<()> {
        self.write_collection("appointments", &appointments).await
    }
}

#[async_trait]
impl CustomerStore for JsonFileStore {
    async fn get_customers(&self) -> AppResult<Vec<Customer>> {
        Ok(self.read_collection("customers"))
    }

    async fn save_customers(&self, customers: Vec<Customer>) -> AppResult<()> {
        self.write_collection("customers", &customers).await
    }
}
