/// Scheduling service: availability queries, booking creation, lifecycle ops
///
/// Orchestrates validation in a fixed order (presence, date range, overlap,
/// assignment), then writes through the injected store. All mutating paths
/// run under a single booking gate so a check-then-write pair can never
/// interleave with another one; two requests for the same slot resolve to
/// one success and one `SlotUnavailable`.
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::scheduling::domain::entities::{Appointment, Booking, Job};
use crate::modules::scheduling::domain::repository::BookingStore;
use crate::modules::scheduling::domain::roster::assign_employee;
use crate::modules::scheduling::domain::services::AvailabilityEngine;
use crate::modules::scheduling::domain::value_objects::{JobStatus, JobType, TimeWindow};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub start: String,
    pub end: String,
    pub job_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub unavailable_slots: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_id: String,
    pub scheduled_start: String,
    pub scheduled_end: String,
    pub job_type: String,
    pub duration: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// The job/appointment pair emitted by a successful booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub job: Job,
    pub appointment: Appointment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub job_id: String,
    pub customer_id: String,
    pub scheduled_start: String,
    pub scheduled_end: String,
    pub location: String,
    pub job_type: String,
}

/// Partial update for a job; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPatch {
    #[serde(default)]
    pub scheduled_start: Option<String>,
    #[serde(default)]
    pub scheduled_end: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

pub struct SchedulingService {
    store: Arc<dyn BookingStore>,
    engine: AvailabilityEngine,
    // Single-writer gate: held across every read-validate-write sequence
    booking_gate: Mutex<()>,
}

impl SchedulingService {
    pub fn new(store: Arc<dyn BookingStore>, tz: Tz) -> Self {
        Self {
            store,
            engine: AvailabilityEngine::new(tz),
            booking_gate: Mutex::new(()),
        }
    }

    /// Unavailable slots per local day for one job type.
    ///
    /// Read-only over the store snapshot at call time. A range spanning
    /// zero days is a legal query and yields an empty mapping.
    pub async fn availability(&self, query: &AvailabilityQuery) -> AppResult<AvailabilityResponse> {
        Validator::require("start", &query.start)?;
        Validator::require("end", &query.end)?;
        Validator::require("job_type", &query.job_type)?;

        let start = parse_instant(&query.start)?;
        let end = parse_instant(&query.end)?;
        let job_type: JobType = query.job_type.parse()?;

        let bookings = self.load_bookings().await?;
        let unavailable_slots = self
            .engine
            .compute_unavailability(job_type, start, end, &bookings);

        debug!(
            "availability: {} days computed for {} over {} bookings",
            unavailable_slots.len(),
            job_type,
            bookings.len()
        );
        Ok(AvailabilityResponse { unavailable_slots })
    }

    /// Validate and persist a new job/appointment pair.
    ///
    /// Validation order: required fields, date range, overlap against all
    /// bookings of the same job type, then employee assignment. Nothing is
    /// written unless every step passes.
    pub async fn create_booking(&self, request: &BookingRequest) -> AppResult<BookingConfirmation> {
        Validator::require("customer_id", &request.customer_id)?;
        Validator::require("job_type", &request.job_type)?;
        Validator::require("scheduled_start", &request.scheduled_start)?;
        Validator::require("scheduled_end", &request.scheduled_end)?;
        // duration stays a required field but the stored value is derived
        // from the window, so it always equals end - start
        if !matches!(request.duration, Some(d) if d > 0) {
            return Err(AppError::MissingFields("duration".to_string()));
        }

        let window = TimeWindow::parse(&request.scheduled_start, &request.scheduled_end)?;
        let job_type: JobType = request.job_type.parse()?;

        let _gate = self.booking_gate.lock().await;

        let mut jobs = self.store.get_jobs().await?;
        let mut appointments = self.store.get_appointments().await?;
        Self::ensure_slot_free(job_type, window, &jobs, &appointments, None)?;

        let employee_id = assign_employee(job_type);
        let now = Utc::now();
        let job = Job::new(
            request.customer_id.clone(),
            job_type,
            window,
            request.notes.clone().filter(|n| !n.trim().is_empty()),
            employee_id.clone(),
            now,
        );
        let appointment = Appointment::for_job(
            &job,
            request.location.clone().unwrap_or_default(),
            employee_id,
        );

        jobs.push(job.clone());
        appointments.push(appointment.clone());
        self.store.save_jobs(jobs).await?;
        self.store.save_appointments(appointments).await?;

        info!(
            "booked {} for {}: {} .. {}",
            job.job_type,
            job.customer_id,
            job.scheduled_start.to_rfc3339(),
            job.scheduled_end.to_rfc3339()
        );
        Ok(BookingConfirmation { job, appointment })
    }

    /// Create a standalone appointment for an existing job that does not
    /// have one yet
    pub async fn create_appointment(&self, request: &AppointmentRequest) -> AppResult<Appointment> {
        Validator::require("job_id", &request.job_id)?;
        Validator::require("customer_id", &request.customer_id)?;
        Validator::require("scheduled_start", &request.scheduled_start)?;
        Validator::require("scheduled_end", &request.scheduled_end)?;

        let window = TimeWindow::parse(&request.scheduled_start, &request.scheduled_end)?;
        let job_type: JobType = request.job_type.parse()?;

        let _gate = self.booking_gate.lock().await;

        let jobs = self.store.get_jobs().await?;
        if !jobs.iter().any(|j| j.id == request.job_id) {
            return Err(AppError::NotFound(format!(
                "Job with ID {} not found",
                request.job_id
            )));
        }

        let mut appointments = self.store.get_appointments().await?;
        // exactly one appointment per live job
        if appointments.iter().any(|a| a.job_id == request.job_id) {
            return Err(AppError::ValidationError(format!(
                "Job {} already has an appointment",
                request.job_id
            )));
        }

        let appointment = Appointment::for_window(
            request.job_id.clone(),
            request.customer_id.clone(),
            job_type,
            window,
            request.location.clone(),
            assign_employee(job_type),
        );

        appointments.push(appointment.clone());
        self.store.save_appointments(appointments).await?;

        info!("appointment {} created for job {}", appointment.id, appointment.job_id);
        Ok(appointment)
    }

    /// Patch a job and keep its appointment in sync.
    ///
    /// A schedule-affecting patch re-runs the overlap check against every
    /// other booking of the same job type before anything is written.
    /// Status and notes stay job-only.
    pub async fn update_job(&self, job_id: &str, patch: &JobPatch) -> AppResult<Job> {
        Validator::require("job_id", job_id)?;
        let status = patch
            .status
            .as_deref()
            .map(str::parse::<JobStatus>)
            .transpose()?;

        let _gate = self.booking_gate.lock().await;

        let mut jobs = self.store.get_jobs().await?;
        let mut appointments = self.store.get_appointments().await?;
        let index = jobs
            .iter()
            .position(|j| j.id == job_id)
            .ok_or_else(|| AppError::NotFound(format!("Job with ID {} not found", job_id)))?;

        let mut job = jobs[index].clone();
        let schedule_changed = patch.scheduled_start.is_some() || patch.scheduled_end.is_some();

        if schedule_changed {
            let start = match &patch.scheduled_start {
                Some(s) => parse_instant(s)?,
                None => job.scheduled_start,
            };
            let end = match &patch.scheduled_end {
                Some(s) => parse_instant(s)?,
                None => job.scheduled_end,
            };
            let window = TimeWindow::new(start, end)?;
            Self::ensure_slot_free(job.job_type, window, &jobs, &appointments, Some(job_id))?;

            job.scheduled_start = window.start;
            job.scheduled_end = window.end;
            job.duration = window.duration_minutes();
        }
        if let Some(status) = status {
            job.status = status;
        }
        if let Some(notes) = patch.notes.clone().filter(|n| !n.trim().is_empty()) {
            job.notes = Some(notes);
        }
        let now = Utc::now();
        job.updated_at = now;
        jobs[index] = job.clone();

        if schedule_changed {
            for appointment in appointments.iter_mut().filter(|a| a.job_id == job_id) {
                appointment.scheduled_start = job.scheduled_start;
                appointment.scheduled_end = job.scheduled_end;
                appointment.duration = job.duration;
                appointment.updated_at = Some(now);
            }
        }

        self.store.save_jobs(jobs).await?;
        self.store.save_appointments(appointments).await?;

        info!("job {} updated", job_id);
        Ok(job)
    }

    /// Delete a job and cascade to every appointment linked to it
    pub async fn delete_job(&self, job_id: &str) -> AppResult<()> {
        Validator::require("job_id", job_id)?;

        let _gate = self.booking_gate.lock().await;

        let mut jobs = self.store.get_jobs().await?;
        let index = jobs
            .iter()
            .position(|j| j.id == job_id)
            .ok_or_else(|| AppError::NotFound(format!("Job with ID {} not found", job_id)))?;
        jobs.remove(index);

        let mut appointments = self.store.get_appointments().await?;
        appointments.retain(|a| a.job_id != job_id);

        self.store.save_jobs(jobs).await?;
        self.store.save_appointments(appointments).await?;

        info!("job {} and linked appointments deleted", job_id);
        Ok(())
    }

    /// All jobs, optionally narrowed to one customer
    pub async fn list_jobs(&self, customer_id: Option<&str>) -> AppResult<Vec<Job>> {
        let mut jobs = self.store.get_jobs().await?;
        if let Some(customer_id) = customer_id {
            jobs.retain(|j| j.customer_id == customer_id);
        }
        Ok(jobs)
    }

    async fn load_bookings(&self) -> AppResult<Vec<Booking>> {
        let jobs = self.store.get_jobs().await?;
        let appointments = self.store.get_appointments().await?;
        Ok(Booking::collect(&jobs, &appointments))
    }

    /// Reject the window if any booking of the same type overlaps it.
    /// `exclude_job_id` exempts a job being moved and its own appointments.
    fn ensure_slot_free(
        job_type: JobType,
        window: TimeWindow,
        jobs: &[Job],
        appointments: &[Appointment],
        exclude_job_id: Option<&str>,
    ) -> AppResult<()> {
        let conflict = jobs
            .iter()
            .filter(|j| Some(j.id.as_str()) != exclude_job_id)
            .map(Booking::from)
            .chain(
                appointments
                    .iter()
                    .filter(|a| Some(a.job_id.as_str()) != exclude_job_id)
                    .map(Booking::from),
            )
            .filter(|b| b.job_type == job_type)
            .any(|b| b.window.overlaps(&window));

        if conflict {
            return Err(AppError::SlotUnavailable(format!(
                "{} is already booked between {} and {}",
                job_type,
                window.start.to_rfc3339(),
                window.end.to_rfc3339()
            )));
        }
        Ok(())
    }
}

fn parse_instant(value: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value.trim())?.with_timezone(&Utc))
}
