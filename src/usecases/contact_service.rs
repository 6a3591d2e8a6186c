//! Contact form and appointment requests. One insert per submission.
//!
//! The only checks are the ones a browser form enforces: required fields present and an
//! email that looks like `local@domain`. Everything else is left to the store schema.

use crate::domain::{AppointmentRequest, ContactSubmission};
use crate::ports::ClinicStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

pub const CONTACT_SUCCESS_NOTICE: &str =
    "Thank you for contacting us! We'll get back to you shortly.";
pub const CONTACT_FAILURE_NOTICE: &str = "Failed to submit form. Please try again.";
pub const APPOINTMENT_SUCCESS_NOTICE: &str =
    "Thank you! Your appointment request has been received. We'll call you to confirm.";
pub const APPOINTMENT_FAILURE_NOTICE: &str =
    "Failed to submit appointment request. Please try again.";

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Required fields are missing or malformed; nothing was sent.
    Incomplete(Vec<&'static str>),
    Submitted(&'static str),
    Failed(&'static str),
}

/// True for `local@domain` with both parts non-empty and no whitespace.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Contact form values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Required fields that are blank, plus `email` when it is malformed.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push("name");
        }
        if !looks_like_email(&self.email) {
            missing.push("email");
        }
        if blank(&self.subject) {
            missing.push("subject");
        }
        if blank(&self.message) {
            missing.push("message");
        }
        missing
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Appointment form values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: String,
    pub treatment_type: String,
    pub message: String,
}

impl AppointmentForm {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.patient_name) {
            missing.push("patient_name");
        }
        if !looks_like_email(&self.email) {
            missing.push("email");
        }
        if blank(&self.phone) {
            missing.push("phone");
        }
        if self.preferred_date.is_none() {
            missing.push("preferred_date");
        }
        if blank(&self.preferred_time) {
            missing.push("preferred_time");
        }
        if blank(&self.treatment_type) {
            missing.push("treatment_type");
        }
        missing
    }

    /// `None` while required fields are missing.
    pub fn to_request(&self) -> Option<AppointmentRequest> {
        if !self.missing_fields().is_empty() {
            return None;
        }
        Some(AppointmentRequest {
            patient_name: self.patient_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            preferred_date: self.preferred_date?,
            preferred_time: self.preferred_time.trim().to_string(),
            treatment_type: self.treatment_type.trim().to_string(),
            message: optional(&self.message),
        })
    }
}

/// Contact service. Writes submissions to the store.
pub struct ContactService {
    store: Arc<dyn ClinicStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    /// Submit the contact form. Clears it on success, keeps the values otherwise.
    pub async fn submit(&self, form: &mut ContactForm) -> FormOutcome {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return FormOutcome::Incomplete(missing);
        }

        match self
            .store
            .insert_contact_submission(&form.to_submission())
            .await
        {
            Ok(()) => {
                info!("contact submission stored");
                *form = ContactForm::default();
                FormOutcome::Submitted(CONTACT_SUCCESS_NOTICE)
            }
            Err(e) => {
                warn!(error = %e, "contact submission failed");
                FormOutcome::Failed(CONTACT_FAILURE_NOTICE)
            }
        }
    }

    /// Submit an appointment request. Same contract as [`ContactService::submit`].
    pub async fn request_appointment(&self, form: &mut AppointmentForm) -> FormOutcome {
        let Some(request) = form.to_request() else {
            return FormOutcome::Incomplete(form.missing_fields());
        };

        match self.store.insert_appointment(&request).await {
            Ok(()) => {
                info!(date = %request.preferred_date, "appointment request stored");
                *form = AppointmentForm::default();
                FormOutcome::Submitted(APPOINTMENT_SUCCESS_NOTICE)
            }
            Err(e) => {
                warn!(error = %e, "appointment request failed");
                FormOutcome::Failed(APPOINTMENT_FAILURE_NOTICE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Priya Sharma".into(),
            email: "priya@example.com".into(),
            phone: String::new(),
            subject: "Appointment Request".into(),
            message: "I'd like a cleaning next week.".into(),
        }
    }

    fn filled_appointment() -> AppointmentForm {
        AppointmentForm {
            patient_name: "Ravi Kumar".into(),
            email: "ravi@example.com".into(),
            phone: "+91 9876543210".into(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 11, 3),
            preferred_time: "10:00 AM".into(),
            treatment_type: "Root Canal Treatment".into(),
            message: String::new(),
        }
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email(" john@example.com "));
        assert!(!looks_like_email("john.example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("john@"));
        assert!(!looks_like_email("jo hn@example.com"));
    }

    #[tokio::test]
    async fn test_successful_submit_clears_form() {
        let store = Arc::new(InMemoryStore::new());
        let service = ContactService::new(store.clone());
        let mut form = filled_form();

        let outcome = service.submit(&mut form).await;

        assert_eq!(outcome, FormOutcome::Submitted(CONTACT_SUCCESS_NOTICE));
        assert_eq!(form, ContactForm::default());
        let stored = store.contact_submissions().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Priya Sharma");
        assert_eq!(stored[0].phone, None);
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_values() {
        let store = Arc::new(InMemoryStore::new());
        store.set_failing(true);
        let service = ContactService::new(store.clone());
        let mut form = filled_form();

        let outcome = service.submit(&mut form).await;

        assert_eq!(outcome, FormOutcome::Failed(CONTACT_FAILURE_NOTICE));
        assert_eq!(form, filled_form());
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_sent() {
        let store = Arc::new(InMemoryStore::new());
        let service = ContactService::new(store.clone());
        let mut form = ContactForm {
            subject: "  ".into(),
            email: "not-an-email".into(),
            ..filled_form()
        };

        let outcome = service.submit(&mut form).await;

        assert_eq!(outcome, FormOutcome::Incomplete(vec!["email", "subject"]));
        assert!(store.contact_submissions().await.is_empty());
        assert_eq!(form.name, "Priya Sharma");
    }

    #[tokio::test]
    async fn test_appointment_round_trip_through_store() {
        let store = Arc::new(InMemoryStore::new());
        let service = ContactService::new(store.clone());
        let mut form = filled_appointment();

        let outcome = service.request_appointment(&mut form).await;

        assert_eq!(outcome, FormOutcome::Submitted(APPOINTMENT_SUCCESS_NOTICE));
        assert_eq!(form, AppointmentForm::default());
        let stored = store.appointments().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].treatment_type, "Root Canal Treatment");
        assert_eq!(stored[0].message, None);
    }

    #[tokio::test]
    async fn test_appointment_missing_date() {
        let store = Arc::new(InMemoryStore::new());
        let service = ContactService::new(store.clone());
        let mut form = AppointmentForm {
            preferred_date: None,
            ..filled_appointment()
        };

        let outcome = service.request_appointment(&mut form).await;

        assert_eq!(outcome, FormOutcome::Incomplete(vec!["preferred_date"]));
        assert!(store.appointments().await.is_empty());
    }

    #[tokio::test]
    async fn test_appointment_failure_preserves_values() {
        let store = Arc::new(InMemoryStore::new());
        store.set_failing(true);
        let service = ContactService::new(store);
        let mut form = filled_appointment();

        let outcome = service.request_appointment(&mut form).await;

        assert_eq!(outcome, FormOutcome::Failed(APPOINTMENT_FAILURE_NOTICE));
        assert_eq!(form, filled_appointment());
    }
}
