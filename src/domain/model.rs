use crate::utils::error::PrimeError;
use std::fmt;
use std::str::FromStr;

/// A whole number read from one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate(pub i64);

impl Candidate {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for Candidate {
    type Err = PrimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Candidate)
            .map_err(|_| PrimeError::InvalidNumber {
                input: s.to_string(),
            })
    }
}

/// Outcome of checking a [`Candidate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_prime: bool,
    pub message: String,
    /// Smallest divisor found, when trial division disproved primality.
    pub divisor: Option<i64>,
}

impl Verdict {
    pub fn prime(n: i64) -> Self {
        Self {
            is_prime: true,
            message: format!("{} is a prime number!", n),
            divisor: None,
        }
    }

    pub fn composite(n: i64, divisor: i64) -> Self {
        Self {
            is_prime: false,
            message: format!("{} is not prime because it is divisible by {}!", n, divisor),
            divisor: Some(divisor),
        }
    }

    pub fn by_definition(message: impl Into<String>) -> Self {
        Self {
            is_prime: false,
            message: message.into(),
            divisor: None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Done,
}

/// Completion message posted by the input reader for each requested line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Ended,
}
