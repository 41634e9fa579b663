//! Short code generation.
//!
//! Codes are drawn uniformly from a URL-safe alphabet using the thread-local
//! CSPRNG (`rand::rng()`, ChaCha-based and reseeded from the OS), so they are
//! not guessable from previously issued codes.
//!
//! The generator makes no uniqueness promise. Collisions surface as
//! [`crate::domain::repositories::StoreError::DuplicateCode`] from the store.

use rand::Rng;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Lowercase URL-safe alphabet.
///
/// Codes are normalized to lowercase before storage, so drawing from a
/// mixed-case alphabet would skew the distribution after normalization.
pub const DEFAULT_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_-";

/// Produces fixed-length random codes.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    length: usize,
    alphabet: &'static [u8],
}

impl CodeGenerator {
    /// Creates a generator for codes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            alphabet: DEFAULT_ALPHABET,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_alphabet(length: usize, alphabet: &'static [u8]) -> Self {
        Self { length, alphabet }
    }

    /// Generates a new random code.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let code = CodeGenerator::new(5).generate();
    /// assert_eq!(code.len(), 5);
    /// ```
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())] as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}
