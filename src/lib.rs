#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::input::{spawn_line_reader, LineReader};
pub use crate::core::prime::check;
pub use crate::core::repl::{banner, evaluate_line, PrimeRepl, Step};
pub use crate::domain::model::{Candidate, InputEvent, LoopState, Verdict};
pub use crate::domain::ports::LineSource;
pub use crate::utils::error::{PrimeError, Result};
