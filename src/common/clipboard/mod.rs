use std::future::Future;
use std::sync::mpsc;
use std::thread;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::common::error::ClipboardError;

pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

//Whatever actually holds the clipboard selection
trait ClipboardBackend {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

impl ClipboardBackend for arboard::Clipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        arboard::Clipboard::set_text(self, text).map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

struct WriteRequest {
    text: String,
    reply: oneshot::Sender<Result<(), ClipboardError>>,
}

/// The desktop clipboard, through `arboard`.
///
/// On X11 and Wayland the copied text only lives as long as the handle that
/// set it, so one worker thread opens the clipboard once and keeps it until
/// this value is dropped.
#[derive(Clone)]
pub struct SystemClipboard {
    requests: mpsc::Sender<WriteRequest>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_backend(|| {
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
        })
    }

    fn with_backend<B, F>(mut open: F) -> Self
    where
        B: ClipboardBackend + 'static,
        F: FnMut() -> Result<B, ClipboardError> + Send + 'static,
    {
        let (requests, inbox) = mpsc::channel::<WriteRequest>();
        thread::spawn(move || {
            let mut backend: Option<B> = None;
            for WriteRequest { text, reply } in inbox {
                //Opened lazily, a failed open is retried on the next write
                let opened = match backend.take() {
                    Some(backend) => Ok(backend),
                    None => open(),
                };
                let result = match opened {
                    Ok(mut handle) => {
                        let result = handle.set_text(text);
                        backend = Some(handle);
                        result
                    }
                    Err(e) => Err(e),
                };
                if reply.send(result).is_err() {
                    warn!("Clipboard write finished after the caller gave up");
                }
            }
            debug!("Clipboard worker stopped");
        });
        Self { requests }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(WriteRequest {
                text: text.to_owned(),
                reply,
            })
            .map_err(|_| ClipboardError::Task("clipboard worker stopped".to_string()))?;
        response
            .await
            .map_err(|e| ClipboardError::Task(e.to_string()))?
    }
}
