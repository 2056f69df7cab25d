pub mod command;
pub mod controller;
pub mod copy_state;

pub use controller::{CopyOutcome, PasswordSession, PasswordState};
pub use copy_state::{CopyIndicator, ResetPolicy};
