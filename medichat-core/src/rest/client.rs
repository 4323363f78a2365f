//! HTTP client for the PostgREST endpoint.

use std::time::Duration;

use medichat_config::{AnonKey, SupabaseConfig};
use reqwest::{Client, header};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, Result};

use super::query::TableQuery;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only client for the hosted database's REST endpoint.
///
/// Every request authenticates with the project's anon key, so row-level
/// security on the server decides what is visible.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: Client,
    base_url: Url,
    anon_key: AnonKey,
}

/// Error body PostgREST returns on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

impl RestClient {
    /// Build a client for the project in `config`.
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = config
            .rest_url()
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        debug!(base_url = %base_url, "created rest client");

        Ok(Self {
            http,
            base_url,
            anon_key: config.anon_key().clone(),
        })
    }

    /// Build the endpoint URL for a table.
    pub fn table_url(&self, table: &str) -> Result<Url> {
        self.base_url
            .join(table)
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))
    }

    /// Run a query and decode every returned row.
    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Vec<T>> {
        query.validate().map_err(FetchError::InvalidRequest)?;
        let table = query.table();
        let url = self.table_url(table)?;

        let response = self
            .http
            .get(url)
            .query(&query.to_query_pairs())
            .header("apikey", self.anon_key.expose())
            .bearer_auth(self.anon_key.expose())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(table, %status, %message, "query rejected");
            return Err(FetchError::Status {
                table: table.to_string(),
                status,
                message,
            });
        }

        let rows: Vec<T> = serde_json::from_str(&body).map_err(|e| {
            FetchError::MalformedResponse {
                table: table.to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(table, rows = rows.len(), "query succeeded");
        Ok(rows)
    }

    /// Run a query that must match exactly one row.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<T> {
        let mut rows = self.select::<T>(query).await?;
        match rows.len() {
            0 => Err(FetchError::NotFound {
                table: query.table().to_string(),
            }),
            1 => Ok(rows.remove(0)),
            n => Err(FetchError::MalformedResponse {
                table: query.table().to_string(),
                reason: format!("expected a single row, got {n}"),
            }),
        }
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            code: Some(code),
        }) => format!("{message} ({code})"),
        Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_postgrest_fields() {
        assert_eq!(
            error_message(
                r#"{"code":"42P01","message":"relation \"public.doctorz\" does not exist"}"#
            ),
            "relation \"public.doctorz\" does not exist (42P01)"
        );
        assert_eq!(error_message(r#"{"message":"nope"}"#), "nope");
        assert_eq!(error_message("  "), "empty response body");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn table_url_sits_under_rest_v1() {
        let config =
            SupabaseConfig::new("https://proj.supabase.co", "eyabc123def456")
                .expect("config");
        let client = RestClient::new(&config).expect("client");
        assert_eq!(
            client.table_url("doctors").expect("url").as_str(),
            "https://proj.supabase.co/rest/v1/doctors"
        );
    }

    #[test]
    fn debug_output_redacts_anon_key() {
        let config =
            SupabaseConfig::new("https://proj.supabase.co", "eysecret_anon_key")
                .expect("config");
        let client = RestClient::new(&config).expect("client");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("eysecret_anon_key"), "{rendered}");
        assert!(rendered.contains("<redacted>"));
    }
}
