//! Core library for medichat: typed access to the hosted database and the
//! doctor directory built on top of it.

pub mod doctors;
pub mod error;
pub mod rest;

pub use doctors::{DOCTORS_TABLE, DoctorRepository, RestDoctorRepository};
pub use error::{FetchError, Result};
pub use rest::{Direction, RestClient, TableQuery};
