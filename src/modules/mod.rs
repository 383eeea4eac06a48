pub mod customers;
pub mod scheduling;
