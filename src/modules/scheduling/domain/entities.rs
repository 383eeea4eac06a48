/// Scheduling entities
///
/// A `Job` and its `Appointment` are created together by the booking engine
/// and always share the same scheduling window. For overlap purposes both
/// collapse into a `Booking`: an occupied interval tagged with a job type.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{JobStatus, JobType, TimeWindow};

/// Fixed arrival window communicated to the customer, in minutes
pub const ARRIVAL_WINDOW_MINUTES: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub customer_id: String,
    #[serde(rename = "jobType")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
    /// Minutes, informational; equals end - start under correct construction
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Employee IDs, never empty
    pub assigned_employees: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a freshly scheduled job for a validated window. Duration is
    /// derived from the window, never taken on trust.
    pub fn new(
        customer_id: String,
        job_type: JobType,
        window: TimeWindow,
        notes: Option<String>,
        employee_id: String,
        now: DateTime<Utc>,
    ) -> Self {
        // Millis alone can collide for bookings made in the same instant,
        // so a short random suffix keeps ids unique
        let suffix = Uuid::new_v4().simple().to_string();
        Self {
            id: format!("job_{}_{}", now.timestamp_millis(), &suffix[..6]),
            customer_id,
            job_type,
            status: JobStatus::Scheduled,
            scheduled_start: window.start,
            scheduled_end: window.end,
            duration: window.duration_minutes(),
            notes,
            assigned_employees: vec![employee_id],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.scheduled_start,
            end: self.scheduled_end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub job_id: String,
    pub customer_id: String,
    #[serde(rename = "jobType")]
    pub job_type: JobType,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
    /// Minutes, derived from the window rather than supplied
    pub duration: i64,
    pub location: String,
    /// Single employee ID
    pub assigned_technician: String,
    pub status: JobStatus,
    pub arrival_window_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Create the appointment mirroring a job's window
    pub fn for_job(job: &Job, location: String, technician: String) -> Self {
        Self::for_window(
            job.id.clone(),
            job.customer_id.clone(),
            job.job_type,
            job.window(),
            location,
            technician,
        )
    }

    /// Create an appointment for an explicit window (standalone surface)
    pub fn for_window(
        job_id: String,
        customer_id: String,
        job_type: JobType,
        window: TimeWindow,
        location: String,
        technician: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            customer_id,
            job_type,
            scheduled_start: window.start,
            scheduled_end: window.end,
            duration: window.duration_minutes(),
            location,
            assigned_technician: technician,
            status: JobStatus::Scheduled,
            arrival_window_minutes: ARRIVAL_WINDOW_MINUTES,
            updated_at: None,
        }
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.scheduled_start,
            end: self.scheduled_end,
        }
    }
}

/// A job or appointment considered purely as an occupied interval
#[derive(Debug, Clone, Copy)]
pub struct Booking {
    pub job_type: JobType,
    pub window: TimeWindow,
}

impl Booking {
    /// Union of jobs and appointments as occupied intervals
    pub fn collect(jobs: &[Job], appointments: &[Appointment]) -> Vec<Booking> {
        appointments
            .iter()
            .map(Booking::from)
            .chain(jobs.iter().map(Booking::from))
            .collect()
    }
}

impl From<&Job> for Booking {
    fn from(job: &Job) -> Self {
        Self {
            job_type: job.job_type,
            window: job.window(),
        }
    }
}

impl From<&Appointment> for Booking {
    fn from(appointment: &Appointment) -> Self {
        Self {
            job_type: appointment.job_type,
            window: appointment.window(),
        }
    }
}
