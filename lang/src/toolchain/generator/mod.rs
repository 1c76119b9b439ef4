//! Emits a token sequence as flat C text.
//!
//! Every token up to the end marker is written followed by a single space, the last one
//! included. String literal bodies get their quotes back, everything else is written as is. No
//! attempt is made to restore the source layout.

use std::io::Write;

use crate::toolchain::lexer::{Token, TokenKind};

pub struct Generator;

impl Generator {
    pub fn generate<'s, W: Write>(
        tokens: impl IntoIterator<Item = &'s Token<'s>>,
        out: &mut W,
    ) -> std::io::Result<()> {
        for token in tokens {
            match token.kind {
                TokenKind::EndOfInput => break,
                TokenKind::StringLiteral => {
                    out.write_all(b"\"")?;
                    out.write_all(token.string)?;
                    out.write_all(b"\" ")?;
                }
                TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::Keyword
                | TokenKind::Operator => {
                    out.write_all(token.string)?;
                    out.write_all(b" ")?;
                }
            }
        }
        Ok(())
    }

    pub fn emit<'s>(tokens: impl IntoIterator<Item = &'s Token<'s>>) -> Vec<u8> {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = Self::generate(tokens, &mut out);
        out
    }
}
