use rand::Rng;

use super::alphabet::build_alphabet;

/// Generate a password of exactly `length` characters.
///
/// Uses the thread local generator. Not meant to be cryptographically strong.
pub fn generate(length: usize, include_digits: bool, include_symbols: bool) -> String {
    let mut rng = rand::thread_rng();
    generate_with_rng(&mut rng, length, include_digits, include_symbols)
}

/// Same as [`generate`] but draws from the supplied random source.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    include_digits: bool,
    include_symbols: bool,
) -> String {
    let alphabet = build_alphabet(include_digits, include_symbols);
    //Alphabet is pure ASCII so byte indexing is char indexing
    let chars = alphabet.as_bytes();

    //Every position is an independent draw, repeats are allowed
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect()
}
