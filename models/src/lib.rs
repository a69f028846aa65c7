// models/src/lib.rs

pub mod errors;
pub mod patient;
pub mod validation;

pub use crate::errors::{ValidationError, ValidationResult};
pub use crate::patient::{Gender, NewPatient, Patient, UpdatePatient, MAX_AGE};
pub use crate::validation::{parse_age, parse_gender};
