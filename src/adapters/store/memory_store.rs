//! In-memory ClinicStore for tests and demos.
//!
//! Applies the same ordering and limits the hosted queries do, records inserts,
//! and can be switched to fail every call.

use crate::domain::{
    AppointmentRequest, ContactSubmission, DomainError, Faq, Pricing, Testimonial, Treatment,
    TreatmentWithPricing,
};
use crate::ports::ClinicStore;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryStore {
    treatments: Vec<Treatment>,
    pricing: Vec<Pricing>,
    faqs: Vec<Faq>,
    testimonials: Vec<Testimonial>,
    contact_submissions: Mutex<Vec<ContactSubmission>>,
    appointments: Mutex<Vec<AppointmentRequest>>,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_treatments(mut self, treatments: Vec<Treatment>) -> Self {
        self.treatments = treatments;
        self
    }

    pub fn with_pricing(mut self, pricing: Vec<Pricing>) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_faqs(mut self, faqs: Vec<Faq>) -> Self {
        self.faqs = faqs;
        self
    }

    pub fn with_testimonials(mut self, testimonials: Vec<Testimonial>) -> Self {
        self.testimonials = testimonials;
        self
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn contact_submissions(&self) -> Vec<ContactSubmission> {
        self.contact_submissions.lock().await.clone()
    }

    pub async fn appointments(&self) -> Vec<AppointmentRequest> {
        self.appointments.lock().await.clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Store("in-memory store set to fail".to_string()));
        }
        Ok(())
    }

    /// Featured first, otherwise insertion order.
    fn ordered_treatments(&self) -> Vec<Treatment> {
        let mut rows = self.treatments.clone();
        rows.sort_by_key(|t| !t.featured);
        rows
    }
}

#[async_trait::async_trait]
impl ClinicStore for InMemoryStore {
    async fn featured_treatments(&self, limit: usize) -> Result<Vec<Treatment>, DomainError> {
        self.check()?;
        Ok(self
            .treatments
            .iter()
            .filter(|t| t.featured)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn treatments(&self) -> Result<Vec<Treatment>, DomainError> {
        self.check()?;
        Ok(self.ordered_treatments())
    }

    async fn treatments_with_pricing(&self) -> Result<Vec<TreatmentWithPricing>, DomainError> {
        self.check()?;
        Ok(self
            .ordered_treatments()
            .into_iter()
            .map(|treatment| {
                let pricing = self
                    .pricing
                    .iter()
                    .filter(|p| p.treatment_id == treatment.id)
                    .cloned()
                    .collect();
                TreatmentWithPricing { treatment, pricing }
            })
            .collect())
    }

    async fn faqs(&self) -> Result<Vec<Faq>, DomainError> {
        self.check()?;
        let mut rows = self.faqs.clone();
        rows.sort_by_key(|f| f.order_index);
        Ok(rows)
    }

    async fn featured_testimonials(&self, limit: usize) -> Result<Vec<Testimonial>, DomainError> {
        self.check()?;
        Ok(self
            .testimonials
            .iter()
            .filter(|t| t.featured)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert_contact_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), DomainError> {
        self.check()?;
        self.contact_submissions.lock().await.push(submission.clone());
        Ok(())
    }

    async fn insert_appointment(&self, request: &AppointmentRequest) -> Result<(), DomainError> {
        self.check()?;
        self.appointments.lock().await.push(request.clone());
        Ok(())
    }
}
