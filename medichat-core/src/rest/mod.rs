//! Query access to the hosted database's REST endpoint.

pub mod client;
pub mod query;

pub use client::RestClient;
pub use query::{Direction, Order, TableQuery};
