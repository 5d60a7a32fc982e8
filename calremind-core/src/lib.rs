//! Core types for calremind.
//!
//! This crate provides the appointment data engine shared by the CLI and the
//! HTTP server:
//! - `Store` for loading, saving, adding and filtering appointments
//! - `reminder` for attaching reminders and finding the ones that are due
//! - `Settings` for the global configuration file

pub mod appointment;
pub mod config;
pub mod datetime;
pub mod error;
pub mod reminder;
pub mod store;

pub use appointment::{Appointment, NewAppointment};
pub use config::Settings;
pub use error::{CalremindError, CalremindResult};
pub use store::Store;
