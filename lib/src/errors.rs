// lib/src/errors.rs

use std::io;

use thiserror::Error;

use models::errors::ValidationError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("File I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Record file is corrupt: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
