pub mod input;
pub mod prime;
pub mod repl;

pub use crate::domain::model::{Candidate, InputEvent, LoopState, Verdict};
pub use crate::domain::ports::LineSource;
pub use crate::utils::error::Result;
