//! Random shortcode generation and custom code validation.
//!
//! Candidates are not globally unique by themselves; uniqueness is enforced
//! by the registry engine against the entry store.

use rand::Rng;
use serde_json::json;

use crate::error::AppError;

/// Shortcode length in characters.
pub const CODE_LENGTH: usize = 6;

/// Codes reserved for system endpoints to prevent routing conflicts.
const RESERVED_CODES: &[&str] = &["health", "api"];

/// Mixed-case alphanumeric alphabet, 62 symbols.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Validates a caller-supplied custom code against the service's own
/// route namespace.
///
/// The registry engine accepts any non-empty code verbatim; this check
/// belongs to the HTTP adapter, where a code shadowed by a system route
/// or spanning more than one path segment could never be reached through
/// `GET /{code}`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code is reserved or is not a
/// single path segment.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.contains(['/', '?', '#']) {
        return Err(AppError::validation(
            "Custom code must be a single path segment",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::validation(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

/// Produces random candidate shortcodes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Draws codes uniformly at random from [`ALPHABET`].
#[derive(Debug)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self {
            length: CODE_LENGTH,
        }
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let generator = RandomCodeGenerator::new();
        assert_eq!(generator.generate().len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        let generator = RandomCodeGenerator::new();
        let code = generator.generate();

        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = RandomCodeGenerator::new();
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generator.generate());
        }

        // 62^6 candidate space; 1000 draws colliding would be astronomical.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_custom_length() {
        let generator = RandomCodeGenerator::with_length(10);
        assert_eq!(generator.generate().len(), 10);
    }

    #[test]
    fn test_validate_custom_code_accepts_plain_codes() {
        assert!(validate_custom_code("promo2025").is_ok());
        assert!(validate_custom_code("my-Code").is_ok());
    }

    #[test]
    fn test_validate_custom_code_rejects_reserved_routes() {
        for code in ["health", "api"] {
            let err = validate_custom_code(code).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }

    #[test]
    fn test_validate_custom_code_rejects_multi_segment_codes() {
        for code in ["a/b", "api/shorten", "x?y=1", "x#frag"] {
            let err = validate_custom_code(code).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }

    #[test]
    fn test_generated_codes_never_hit_reserved_names() {
        // Reserved names are below the generated length, so the random
        // path cannot mint them.
        assert!(RESERVED_CODES.iter().all(|c| c.len() != CODE_LENGTH));
    }

    #[test]
    fn test_alphabet_has_62_symbols() {
        assert_eq!(ALPHABET.len(), 62);

        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 62);
    }
}
