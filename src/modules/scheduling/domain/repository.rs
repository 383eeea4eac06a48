/// Record store trait for scheduling collections
///
/// Full-collection read/replace only: no partial updates and no query
/// pushdown. Implementations own whatever locking their medium needs; the
/// application layer serializes booking writes on top of this.
use crate::modules::scheduling::domain::entities::{Appointment, Job};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn get_jobs(&self) -> AppResult<Vec<Job>>;
    async fn save_jobs(&self, jobs: Vec<Job>) -> AppResult<()>;
    async fn get_appointments(&self) -> AppResult<Vec<Appointment>>;
    async fn save_appointments(&self, appointments: Vec<Appointment>) -> AppResult<()>;
}
