/// Customers module
///
/// Check-or-create keyed on case-insensitive email, plus simple field
/// matching for lookup. Customers are never auto-deleted.
pub mod application;
pub mod domain;

pub use application::{CheckOrCreateOutcome, CustomerQuery, CustomerService, CustomerSubmission};
pub use domain::{entities::Customer, repository::CustomerStore};
