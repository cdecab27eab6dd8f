use crate::domain::model::InputEvent;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the interactive loop gets its lines from.
#[async_trait]
pub trait LineSource: Send {
    /// Waits for the next line, or [`InputEvent::Ended`] once the stream is exhausted.
    async fn next_event(&mut self) -> Result<InputEvent>;
}

#[async_trait]
impl<S: LineSource + ?Sized> LineSource for &mut S {
    async fn next_event(&mut self) -> Result<InputEvent> {
        (**self).next_event().await
    }
}
