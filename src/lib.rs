//! dental-desk: front-desk kiosk for a dental clinic, built with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
