pub mod clipboard;
pub mod error;
pub mod generator;
pub mod helper;
pub mod session;
