//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    AppointmentRequest, ChatMessage, ContactSubmission, DomainError, Faq, Testimonial, Treatment,
    TreatmentWithPricing,
};

/// Typed access to the hosted clinic store. One method per query the pages issue.
#[async_trait::async_trait]
pub trait ClinicStore: Send + Sync {
    /// Featured treatments, at most `limit`.
    async fn featured_treatments(&self, limit: usize) -> Result<Vec<Treatment>, DomainError>;

    /// All treatments, featured first.
    async fn treatments(&self) -> Result<Vec<Treatment>, DomainError>;

    /// All treatments with their pricing rows embedded, featured first.
    async fn treatments_with_pricing(&self) -> Result<Vec<TreatmentWithPricing>, DomainError>;

    /// All FAQs in ascending `order_index`.
    async fn faqs(&self) -> Result<Vec<Faq>, DomainError>;

    /// Featured testimonials, at most `limit`.
    async fn featured_testimonials(&self, limit: usize) -> Result<Vec<Testimonial>, DomainError>;

    /// Insert one contact form submission.
    async fn insert_contact_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), DomainError>;

    /// Insert one appointment request.
    async fn insert_appointment(&self, request: &AppointmentRequest) -> Result<(), DomainError>;
}

/// Hosted chat completion endpoint.
#[async_trait::async_trait]
pub trait CompletionPort: Send + Sync {
    /// Turn a role-tagged transcript (system prompt first) into one reply.
    ///
    /// `Ok(None)` means the endpoint answered but carried no text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, DomainError>;
}
