pub mod alphabet;
pub mod options;
pub mod password_gen;

pub use options::PasswordOptions;
pub use password_gen::{generate, generate_with_rng};
