//Letters are always part of the alphabet, so it can never be empty.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>/?`";

/// Build the sampling alphabet for the given toggles.
///
/// The order is fixed: letters, then digits, then symbols. Calling this twice
/// with the same flags always returns the same string.
pub fn build_alphabet(include_digits: bool, include_symbols: bool) -> String {
    let mut alphabet =
        String::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());
    alphabet.push_str(LETTERS);
    if include_digits {
        alphabet.push_str(DIGITS);
    }
    if include_symbols {
        alphabet.push_str(SYMBOLS);
    }
    alphabet
}
