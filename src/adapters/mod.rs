//! Infrastructure adapters. Implement outbound ports and the inbound UI.
//!
//! Hosted store, completion endpoint, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod store;
pub mod ui;
