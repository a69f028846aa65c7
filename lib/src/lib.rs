// lib/src/lib.rs

pub mod codec;
pub mod config;
pub mod errors;
pub mod store;

// Explicit re-exports
pub use crate::codec::{load, save, write_report};
pub use crate::config::RegistryConfig;
pub use crate::errors::{RegistryError, RegistryResult};
pub use crate::store::PatientStore;

// Shared domain types come from the 'models' crate.
pub use models::{Gender, NewPatient, Patient, UpdatePatient};
