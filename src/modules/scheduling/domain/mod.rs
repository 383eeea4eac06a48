pub mod entities;
pub mod repository;
pub mod roster;
pub mod services;
pub mod value_objects;

pub use entities::{Appointment, Booking, Job};
pub use repository::BookingStore;
pub use value_objects::{JobStatus, JobType, TimeWindow};
