//! Line acquisition on a dedicated task.
//!
//! The task owns the input stream and reads one line per request. Each request
//! carries a oneshot sender the task completes with an [`InputEvent`], so the
//! stream is never read ahead of what the loop asked for and nothing is left
//! blocked on stdin once the loop stops asking.

use crate::core::{InputEvent, LineSource};
use crate::utils::error::{PrimeError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

type ReadRequest = oneshot::Sender<InputEvent>;

pub struct LineReader {
    requests: mpsc::Sender<ReadRequest>,
    task: JoinHandle<()>,
}

/// Spawns the reader task over `reader` and returns the handle the loop pulls lines from.
pub fn spawn_line_reader<R>(mut reader: R) -> LineReader
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (requests, mut rx) = mpsc::channel::<ReadRequest>(1);

    let task = tokio::spawn(async move {
        let mut buf = Vec::new();

        while let Some(reply) = rx.recv().await {
            buf.clear();
            let event = match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => InputEvent::Ended,
                // Bytes that are not UTF-8 still make a line; parsing rejects it later.
                Ok(_) => InputEvent::Line(decode_line(&buf)),
                Err(e) => {
                    tracing::warn!("Input stream failed, treating as end of input: {}", e);
                    InputEvent::Ended
                }
            };

            let ended = event == InputEvent::Ended;
            if reply.send(event).is_err() || ended {
                break;
            }
        }

        tracing::debug!("Line reader task finished");
    });

    LineReader { requests, task }
}

fn decode_line(buf: &[u8]) -> String {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

#[cfg(test)]
impl LineReader {
    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[async_trait]
impl LineSource for LineReader {
    async fn next_event(&mut self) -> Result<InputEvent> {
        let (tx, rx) = oneshot::channel();
        self.requests
            .send(tx)
            .await
            .map_err(|_| PrimeError::ReaderClosed)?;
        rx.await.map_err(|_| PrimeError::ReaderClosed)
    }
}

impl Drop for LineReader {
    fn drop(&mut self) {
        self.task.abort();
    }
}
