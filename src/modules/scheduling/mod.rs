/// Scheduling module
///
/// Owns everything around bookable time: the slot grid, availability
/// computation, booking creation and the job/appointment lifecycle.
///
/// Architecture:
/// - Domain: entities, value objects, the store trait and the pure engines
/// - Application: the service orchestrating validation, the booking gate
///   and persistence through the store
pub mod application;
pub mod domain;

// Re-exports for easy access
pub use application::{
    AppointmentRequest, AvailabilityQuery, AvailabilityResponse, BookingConfirmation,
    BookingRequest, JobPatch, SchedulingService,
};
pub use domain::{
    entities::{Appointment, Booking, Job},
    repository::BookingStore,
    roster::{default_roster, Employee},
    services::{AvailabilityEngine, SlotGrid},
    value_objects::{JobStatus, JobType, TimeWindow},
};
