use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::copy_state::CopyIndicator;
use crate::common::clipboard::ClipboardWriter;
use crate::common::generator::{PasswordOptions, generate_with_rng};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordState {
    /// Nothing generated yet, the session has not been mounted.
    Idle,
    Ready(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

pub type PasswordListener = Box<dyn FnMut(&PasswordOptions, &str) + Send>;

/// Owns the options, the current password and the copy feedback flag.
///
/// Once mounted, any change to the options regenerates the password straight
/// away. Before that, changes only adjust the options `mount` will start from.
pub struct PasswordSession<R = StdRng> {
    options: PasswordOptions,
    state: PasswordState,
    rng: R,
    listeners: Vec<PasswordListener>,
    copy_feedback: CopyIndicator,
}

impl PasswordSession<StdRng> {
    pub fn new(options: PasswordOptions, copy_feedback: CopyIndicator) -> Self {
        Self::with_rng(options, copy_feedback, StdRng::from_entropy())
    }
}

impl<R: Rng> PasswordSession<R> {
    pub fn with_rng(options: PasswordOptions, copy_feedback: CopyIndicator, rng: R) -> Self {
        Self {
            options,
            state: PasswordState::Idle,
            rng,
            listeners: Vec::new(),
            copy_feedback,
        }
    }

    pub fn subscribe(&mut self, listener: PasswordListener) {
        self.listeners.push(listener);
    }

    //Later calls do nothing
    pub fn mount(&mut self) {
        if self.state != PasswordState::Idle {
            return;
        }
        info!(
            length = self.options.length,
            digits = self.options.include_digits,
            symbols = self.options.include_symbols,
            "Mounting password session"
        );
        self.options_updated();
    }

    pub fn options(&self) -> PasswordOptions {
        self.options
    }

    pub fn state(&self) -> &PasswordState {
        &self.state
    }

    pub fn password(&self) -> Option<&str> {
        match &self.state {
            PasswordState::Ready(password) => Some(password.as_str()),
            PasswordState::Idle => None,
        }
    }

    //Same length again is not a change
    pub fn set_length(&mut self, length: usize) {
        if self.options.length == length {
            return;
        }
        self.options.length = length;
        self.regenerate();
    }

    pub fn toggle_digits(&mut self) {
        self.options.include_digits = !self.options.include_digits;
        self.regenerate();
    }

    pub fn toggle_symbols(&mut self) {
        self.options.include_symbols = !self.options.include_symbols;
        self.regenerate();
    }

    pub fn regenerate(&mut self) {
        if self.state == PasswordState::Idle {
            debug!("Session not mounted yet, options kept for mount");
            return;
        }
        self.options_updated();
    }

    pub fn is_copied(&self) -> bool {
        self.copy_feedback.is_copied()
    }

    pub fn copy_feedback(&self) -> watch::Receiver<bool> {
        self.copy_feedback.subscribe()
    }

    pub async fn copy_current_password<C: ClipboardWriter>(&mut self, clipboard: &C) -> CopyOutcome {
        let Some(password) = self.password().map(str::to_owned) else {
            warn!("Copy requested before the first password was generated");
            return CopyOutcome::Failed;
        };
        self.copy_password(&password, clipboard).await
    }

    //Failures are only logged, password and copy flag stay as they were
    pub async fn copy_password<C: ClipboardWriter>(
        &mut self,
        password: &str,
        clipboard: &C,
    ) -> CopyOutcome {
        match clipboard.write_text(password).await {
            Ok(()) => {
                self.copy_feedback.mark_copied();
                debug!("Password copied to clipboard");
                CopyOutcome::Copied
            }
            Err(e) => {
                error!("Failed to copy: {e}");
                CopyOutcome::Failed
            }
        }
    }

    //Single entry point for mount, option changes and explicit regeneration
    fn options_updated(&mut self) {
        let PasswordOptions {
            length,
            include_digits,
            include_symbols,
        } = self.options;
        let password = generate_with_rng(&mut self.rng, length, include_digits, include_symbols);
        debug!(length, include_digits, include_symbols, "Password regenerated");

        for listener in self.listeners.iter_mut() {
            listener(&self.options, &password);
        }
        self.state = PasswordState::Ready(password);
    }
}
