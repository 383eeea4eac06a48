pub mod service;

pub use service::{CheckOrCreateOutcome, CustomerQuery, CustomerService, CustomerSubmission};
