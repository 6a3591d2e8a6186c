//! Supabase adapter. Implements ClinicStore over the PostgREST API (`/rest/v1`).

use crate::domain::{
    AppointmentRequest, ContactSubmission, DomainError, Faq, Testimonial, Treatment,
    TreatmentWithPricing,
};
use crate::ports::ClinicStore;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

const REST_PATH: &str = "rest/v1";

/// Supabase REST client for the clinic collections.
///
/// Uses the anon key for both the `apikey` header and the bearer token, so row-level
/// security on the project decides what is readable and insertable.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseStore {
    /// Create a new store client.
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g. "https://xyz.supabase.co")
    /// * `anon_key` - Project anon key
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self::with_timeout(base_url, anon_key, Duration::from_secs(30))
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PATH, table)
    }

    /// GET a collection with PostgREST query parameters.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, DomainError> {
        debug!(table, ?query, "store select");
        let res = self
            .client
            .get(self.table_url(table))
            .query(query)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Store(format!("Request to {} failed: {}", table, e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            warn!(table, status = %status, "store select rejected");
            return Err(DomainError::Store(format!(
                "{} select error {}: {}",
                table,
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let rows: Vec<T> = res
            .json()
            .await
            .map_err(|e| DomainError::Store(format!("Failed to parse {} rows: {}", table, e)))?;
        info!(table, rows = rows.len(), "store select complete");
        Ok(rows)
    }

    /// POST one row. Supabase expects an array body; the response body is not requested.
    async fn insert<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<(), DomainError> {
        let res = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await
            .map_err(|e| DomainError::Store(format!("Insert into {} failed: {}", table, e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            warn!(table, status = %status, "store insert rejected");
            return Err(DomainError::Store(format!(
                "{} insert error {}: {}",
                table,
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        info!(table, "store insert complete");
        Ok(())
    }
}

fn select_all() -> (&'static str, String) {
    ("select", "*".to_string())
}

#[async_trait::async_trait]
impl ClinicStore for SupabaseStore {
    async fn featured_treatments(&self, limit: usize) -> Result<Vec<Treatment>, DomainError> {
        self.select(
            "treatments",
            &[
                select_all(),
                ("featured", "eq.true".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn treatments(&self) -> Result<Vec<Treatment>, DomainError> {
        self.select(
            "treatments",
            &[select_all(), ("order", "featured.desc".to_string())],
        )
        .await
    }

    async fn treatments_with_pricing(&self) -> Result<Vec<TreatmentWithPricing>, DomainError> {
        self.select(
            "treatments",
            &[
                ("select", "*,pricing(*)".to_string()),
                ("order", "featured.desc".to_string()),
            ],
        )
        .await
    }

    async fn faqs(&self) -> Result<Vec<Faq>, DomainError> {
        self.select(
            "faqs",
            &[select_all(), ("order", "order_index.asc".to_string())],
        )
        .await
    }

    async fn featured_testimonials(&self, limit: usize) -> Result<Vec<Testimonial>, DomainError> {
        self.select(
            "testimonials",
            &[
                select_all(),
                ("featured", "eq.true".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn insert_contact_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), DomainError> {
        self.insert("contact_submissions", submission).await
    }

    async fn insert_appointment(&self, request: &AppointmentRequest) -> Result<(), DomainError> {
        self.insert("appointments", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = SupabaseStore::new("https://abc.supabase.co/", "anon");
        assert_eq!(
            store.table_url("faqs"),
            "https://abc.supabase.co/rest/v1/faqs"
        );
    }
}
