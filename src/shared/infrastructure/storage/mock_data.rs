/// Mock dataset: deterministic shape, randomized slot hours
///
/// Seeds seven days ahead with one scheduled job+appointment per job type
/// per day, at non-repeating random hours inside working hours. The cache
/// wrapper re-seeds an in-memory store when the data goes stale;
/// regeneration is idempotent (a repeat run yields an equally valid
/// dataset, never a partially mixed one).
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use log::info;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::scheduling::domain::entities::{Appointment, Job};
use crate::modules::scheduling::domain::roster::{assign_employee, default_roster, Employee};
use crate::modules::scheduling::domain::services::SlotGrid;
use crate::modules::scheduling::domain::value_objects::JobType;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::storage::memory::InMemoryStore;

pub struct MockDataSet {
    pub employees: Vec<Employee>,
    pub jobs: Vec<Job>,
    pub appointments: Vec<Appointment>,
}

/// Random unused start hour in 9..17, always leaving the 17:00 slot open
fn random_free_hour(rng: &mut impl Rng, used: &mut HashSet<u32>) -> u32 {
    loop {
        let hour = rng.gen_range(SlotGrid::FIRST_SLOT_HOUR..SlotGrid::LAST_SLOT_HOUR);
        if used.insert(hour) {
            return hour;
        }
    }
}

pub fn generate_mock_data(now: DateTime<Utc>, tz: Tz) -> MockDataSet {
    let grid = SlotGrid::new(tz);
    let today = grid.local_date(now);
    let mut rng = rand::thread_rng();

    let mut jobs = Vec::new();
    let mut appointments = Vec::new();

    for day_offset in 1..=7i64 {
        let date = today + Duration::days(day_offset);
        let mut used_hours = HashSet::new();

        for (type_index, job_type) in JobType::ALL.into_iter().enumerate() {
            let hour = random_free_hour(&mut rng, &mut used_hours);
            let Some(window) = grid.slot_window(date, hour) else {
                continue;
            };
            let employee_id = assign_employee(job_type);

            let mut job = Job::new(
                format!("customer_{}_{}", day_offset, type_index),
                job_type,
                window,
                Some(format!("Mock notes for {}", job_type)),
                employee_id.clone(),
                now,
            );
            job.id = format!("job_{}_{}", day_offset, type_index);

            let appointment = Appointment::for_job(
                &job,
                format!("Mock location {}_{}", day_offset, type_index),
                employee_id,
            );

            jobs.push(job);
            appointments.push(appointment);
        }
    }

    MockDataSet {
        employees: default_roster(),
        jobs,
        appointments,
    }
}

/// Seeds an in-memory store lazily and regenerates it once the seed is
/// older than `max_age`. The store handle stays stable across reseeds.
pub struct MockDataCache {
    store: Arc<InMemoryStore>,
    tz: Tz,
    max_age: Duration,
    seeded_at: Mutex<Option<DateTime<Utc>>>,
}

impl MockDataCache {
    pub fn new(tz: Tz, max_age: Duration) -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            tz,
            max_age,
            seeded_at: Mutex::new(None),
        }
    }

    /// The seeded store, generating the dataset on first access
    pub async fn store(&self) -> AppResult<Arc<InMemoryStore>> {
        self.refresh_if_stale().await?;
        Ok(Arc::clone(&self.store))
    }

    /// Regenerate when unseeded or stale. Returns whether a reseed ran.
    pub async fn refresh_if_stale(&self) -> AppResult<bool> {
        let mut seeded_at = self.seeded_at.lock().await;
        let now = Utc::now();

        let fresh = seeded_at
            .map(|at| now - at < self.max_age)
            .unwrap_or(false);
        if fresh {
            return Ok(false);
        }

        let data = generate_mock_data(now, self.tz);
        info!(
            "seeded mock dataset: {} jobs, {} appointments",
            data.jobs.len(),
            data.appointments.len()
        );
        self.store
            .replace_all(data.jobs, data.appointments, Vec::new())
            .await;
        *seeded_at = Some(now);
        Ok(true)
    }
}
