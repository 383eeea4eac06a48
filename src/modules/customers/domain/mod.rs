pub mod entities;
pub mod repository;

pub use entities::Customer;
pub use repository::CustomerStore;
