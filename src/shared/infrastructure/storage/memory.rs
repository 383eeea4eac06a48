/// In-memory record store
///
/// Backs tests and the demo binary. One lock over all three collections so
/// a replace-all never interleaves with a read of the same collection.
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::customers::domain::entities::Customer;
use crate::modules::customers::domain::repository::CustomerStore;
use crate::modules::scheduling::domain::entities::{Appointment, Job};
use crate::modules::scheduling::domain::repository::BookingStore;
use crate::shared::errors::AppResult;

#[derive(Debug, Default)]
struct Collections {
    jobs: Vec<Job>,
    appointments: Vec<Appointment>,
    customers: Vec<Customer>,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(
        jobs: Vec<Job>,
        appointments: Vec<Appointment>,
        customers: Vec<Customer>,
    ) -> Self {
        Self {
            inner: RwLock::new(Collections {
                jobs,
                appointments,
                customers,
            }),
        }
    }

    /// Replace every collection at once (used by the mock-data seeder)
    pub async fn replace_all(
        &self,
        jobs: Vec<Job>,
        appointments: Vec<Appointment>,
        customers: Vec<Customer>,
    ) {
        let mut inner = self.inner.write().await;
        inner.jobs = jobs;
        inner.appointments = appointments;
        inner.customers = customers;
    }
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn get_jobs(&self) -> AppResult<Vec<Job>> {
        Ok(self.inner.read().await.jobs.clone())
    }

    async fn save_jobs(&self, jobs: Vec<Job>) -> AppResult<()> {
        self.inner.write().await.jobs = jobs;
        Ok(())
    }

    async fn get_appointments(&self) -> AppResult<Vec<Appointment>> {
        Ok(self.inner.read().await.appointments.clone())
    }

    async fn save_appointments(&self, appointments: Vec<Appointment>) -> AppResult<()> {
        self.inner.write().await.appointments = appointments;
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for InMemoryStore {
    async fn get_customers(&self) -> AppResult<Vec<Customer>> {
        Ok(self.inner.read().await.customers.clone())
    }

    async fn save_customers(&self, customers: Vec<Customer>) -> AppResult<()> {
        self.inner.write().await.customers = customers;
        Ok(())
    }
}
