pub mod availability;
pub mod slot_grid;

pub use availability::AvailabilityEngine;
pub use slot_grid::SlotGrid;
