//! Tokenizer/normalizer for raw input text
//!
//! Converts free text into an ordered sequence of normalized tokens:
//! case-folded, punctuation stripped, split on whitespace. Deterministic
//! with no side effects, so the same text always yields the same sequence.

use thiserror::Error;

use crate::types::Token;

/// Tokenizer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// Input was empty, whitespace-only, or contained no word characters
    #[error("Input text is empty after normalization")]
    EmptyInput,
}

/// Normalize raw text into a token sequence
///
/// Words are split on Unicode whitespace; within each word, alphanumeric
/// characters are kept and lower-cased, everything else is dropped.
/// Words that lose all their characters ("--", "!!!") are discarded.
///
/// # Errors
/// Returns `TokenizeError::EmptyInput` when no tokens survive, including
/// empty and whitespace-only input.
pub fn normalize(text: &str) -> Result<Vec<Token>, TokenizeError> {
    let tokens: Vec<Token> = text
        .split_whitespace()
        .filter_map(|word| {
            let normalized: String = word
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(|c| c.to_lowercase())
                .collect();
            if normalized.is_empty() {
                None
            } else {
                Some(Token::new(normalized))
            }
        })
        .collect();

    if tokens.is_empty() {
        return Err(TokenizeError::EmptyInput);
    }
    Ok(tokens)
}
