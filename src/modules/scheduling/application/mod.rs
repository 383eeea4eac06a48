pub mod service;

pub use service::{
    AppointmentRequest, AvailabilityQuery, AvailabilityResponse, BookingConfirmation,
    BookingRequest, JobPatch, SchedulingService,
};
