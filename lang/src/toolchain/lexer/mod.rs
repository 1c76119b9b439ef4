//! A Hormuz lexer, which splits the input source into tokens and substitutes localized keywords.
//!
//! The lexer recognizes a small fixed grammar: identifiers, decimal numbers, double-quoted string
//! literals and ASCII operators. Every identifier is looked up whole in the keyword table, and a
//! hit replaces the token text with the C equivalent. Nothing in the input is an error; bytes the
//! lexer cannot place are dropped and an unterminated string literal ends with the input. Both
//! anomalies are reported as notes to a [DiagnosticConsumer](super::diagnostics::DiagnosticConsumer).
//!

pub mod keywords;
pub mod token;
pub mod tokenized_buffer;

mod cursor;

pub use token::Token;
pub use token::TokenKind;
pub use tokenized_buffer::TokenizedBuffer;

pub type TokenIndex = usize;

/// Switches for behavior that changes the token stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Match keyword table entries containing a space, such as `درحالی که`, across blank space.
    /// Off by default, in which case such entries never match and their words lex separately.
    pub join_phrases: bool,
}

#[cfg(test)]
mod tokenized_buffer_unittests;
