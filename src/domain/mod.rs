//! Core domain layer. No external I/O dependencies.
//!
//! Entities, fixed clinic content and errors live here. Dependencies flow inward.

pub mod clinic;
pub mod entities;
pub mod errors;

pub use entities::{
    AppointmentRequest, ChatMessage, CompletionParams, ContactSubmission, Faq, Pricing, Role,
    Testimonial, Treatment, TreatmentWithPricing,
};
pub use errors::DomainError;
