// Service layer exports
pub mod slots;
pub mod trainers;

pub use slots::{generate_booking_slots, BookableSlot};
pub use trainers::{TrainerStore, TrainerStoreError};
