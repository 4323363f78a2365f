//! Core data model definitions shared across medichat crates.

pub mod doctor;
pub mod ids;

pub use doctor::Doctor;
pub use ids::DoctorId;
