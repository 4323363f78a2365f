//! The doctor directory: listing and detail lookups.

use async_trait::async_trait;
use medichat_model::{Doctor, DoctorId};
use tracing::instrument;

use crate::{
    error::Result,
    rest::{Direction, RestClient, TableQuery},
};

/// Table holding one row per doctor.
pub const DOCTORS_TABLE: &str = "doctors";

/// Repository port for the doctor directory.
///
/// The listing page and the chat page each issue exactly one of these calls
/// per load.
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// All doctors, newest first.
    async fn list_doctors(&self) -> Result<Vec<Doctor>>;

    /// A single doctor by id; `FetchError::NotFound` when absent.
    async fn get_doctor(&self, id: &DoctorId) -> Result<Doctor>;
}

/// [`DoctorRepository`] backed by the hosted database's REST endpoint.
#[derive(Debug, Clone)]
pub struct RestDoctorRepository {
    client: RestClient,
}

impl RestDoctorRepository {
    /// Wrap a configured REST client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DoctorRepository for RestDoctorRepository {
    #[instrument(skip(self))]
    async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        let query = TableQuery::from(DOCTORS_TABLE)
            .order("created_at", Direction::Descending);
        self.client.select(&query).await
    }

    #[instrument(skip_all, fields(id = %id))]
    async fn get_doctor(&self, id: &DoctorId) -> Result<Doctor> {
        let query = TableQuery::from(DOCTORS_TABLE).eq("id", id.as_str());
        self.client.select_single(&query).await
    }
}
