//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the kiosk front end drives the application use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session until the visitor quits.
    async fn run(&self) -> Result<(), DomainError>;
}
