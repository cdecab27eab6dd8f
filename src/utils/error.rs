use thiserror::Error;

/// Guidance shown to the user whenever a line is not a whole number.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a whole number!";

#[derive(Error, Debug)]
pub enum PrimeError {
    #[error("Not a whole number: {input:?}")]
    InvalidNumber { input: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input reader task is no longer running")]
    ReaderClosed,
}

impl PrimeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimeError::InvalidNumber { .. } => INVALID_NUMBER_MESSAGE.to_string(),
            PrimeError::Io(e) => format!("Could not write to the terminal: {}", e),
            PrimeError::ReaderClosed => "Input stopped unexpectedly".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimeError>;
