//! Application use cases. Orchestrate domain logic via ports.

pub mod catalog_service;
pub mod chat_service;
pub mod contact_service;
pub mod faq_service;

pub use catalog_service::{CatalogService, CategoryFilter, HomeContent};
pub use chat_service::ChatService;
pub use contact_service::{AppointmentForm, ContactForm, ContactService, FormOutcome};
pub use faq_service::{Accordion, FaqBoard, FaqService};
