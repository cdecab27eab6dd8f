use crate::core::prime;
use crate::core::{Candidate, InputEvent, LineSource, LoopState};
use crate::utils::error::Result;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const QUIT_TOKEN: &str = "q";
pub const PROMPT: &str = "-> ";

const BANNER: &str = "Is it Prime?\n\
------------\n\
Enter a whole number, and we'll tell you if it is a prime number or not. Enter q to quit.\n\
-> ";

/// Startup text, ending with the prompt for the first line.
pub fn banner() -> &'static str {
    BANNER
}

/// What the loop does with a single line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Quit,
    Reply(String),
}

/// Decides what to do with one line. Never fails: bad input becomes a guidance reply.
pub fn evaluate_line(line: &str) -> Step {
    // Quit must match exactly, so "Q" and "quit" fall through to parsing
    if line.trim() == QUIT_TOKEN {
        return Step::Quit;
    }

    match line.parse::<Candidate>() {
        Ok(candidate) => Step::Reply(prime::check(candidate.value()).message),
        Err(e) => {
            tracing::debug!("Rejected input: {}", e);
            Step::Reply(e.user_friendly_message())
        }
    }
}

/// Drives the prompt/read/reply cycle until the quit token or end of input.
pub struct PrimeRepl<S: LineSource, W: AsyncWrite + Unpin + Send> {
    source: S,
    out: W,
}

impl<S: LineSource, W: AsyncWrite + Unpin + Send> PrimeRepl<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::debug!("Starting interactive loop");
        // The banner already carries the prompt for the first read
        self.write(banner()).await?;

        let mut state = LoopState::Running;
        let mut answered = 0usize;

        while state == LoopState::Running {
            state = match self.source.next_event().await? {
                InputEvent::Ended => {
                    tracing::debug!("Input ended");
                    LoopState::Done
                }
                InputEvent::Line(line) => match evaluate_line(&line) {
                    Step::Quit => {
                        tracing::debug!("Quit requested");
                        LoopState::Done
                    }
                    Step::Reply(reply) => {
                        // Every reply is followed by the prompt for the next read
                        answered += 1;
                        self.write(&format!("{}\n{}", reply, PROMPT)).await?;
                        LoopState::Running
                    }
                },
            };
        }

        tracing::info!("Interactive loop finished after {} answers", answered);
        Ok(())
    }

    // Flushed on every write since the prompt has no trailing newline
    async fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}
