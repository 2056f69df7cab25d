use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, warn};

pub const DEFAULT_RESET_AFTER: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    //Every copy schedules its own reset, the earliest one clears the flag
    #[default]
    Independent,
    //Only the reset of the latest copy may clear the flag
    Restart,
}

/// The transient "copied" flag shown after a successful clipboard write.
pub struct CopyIndicator {
    state: Arc<watch::Sender<bool>>,
    generation: Arc<AtomicU64>,
    reset_after: Duration,
    policy: ResetPolicy,
}

impl CopyIndicator {
    pub fn new(reset_after: Duration, policy: ResetPolicy) -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            reset_after,
            policy,
        }
    }

    pub fn is_copied(&self) -> bool {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub fn policy(&self) -> ResetPolicy {
        self.policy
    }

    pub fn mark_copied(&mut self) {
        let mine = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(true);

        let state = Arc::clone(&self.state);
        let generation = Arc::clone(&self.generation);
        let policy = self.policy;
        let delay = self.reset_after;
        let reset = move || {
            if policy == ResetPolicy::Restart && generation.load(Ordering::SeqCst) != mine {
                //A later copy owns the window now
                return;
            }
            state.send_replace(false);
            debug!("Copy feedback cleared after {:?}", delay);
        };

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    reset();
                });
            }
            Err(_) => {
                warn!("No tokio runtime, clearing copy feedback from a plain thread");
                thread::spawn(move || {
                    thread::sleep(delay);
                    reset();
                });
            }
        }
    }
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_AFTER, ResetPolicy::default())
    }
}
