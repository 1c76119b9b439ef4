use tracing::debug;

use super::cursor::Cursor;
use super::{LexOptions, Token, TokenIndex};
use crate::toolchain::diagnostics::DiagnosticConsumer;
use crate::toolchain::source;

/// The complete token sequence of one source buffer, always terminated by a single
/// [EndOfInput](super::TokenKind::EndOfInput) token.
pub struct TokenizedBuffer<'s> {
    tokens: Vec<Token<'s>>,
    source: &'s source::SourceBuffer<'s>,
}

impl<'s> TokenizedBuffer<'s> {
    pub fn tokenize(
        source: &'s source::SourceBuffer,
        diags: &mut impl DiagnosticConsumer,
    ) -> TokenizedBuffer<'s> {
        Self::tokenize_with_options(source, LexOptions::default(), diags)
    }

    pub fn tokenize_with_options(
        source: &'s source::SourceBuffer,
        options: LexOptions,
        diags: &mut impl DiagnosticConsumer,
    ) -> TokenizedBuffer<'s> {
        let mut cursor = Cursor::new(source, options, diags);
        let mut tokens: Vec<Token<'s>> = cursor.by_ref().collect();
        tokens.push(Token::end(cursor.line()));
        debug!(
            file = source.file_name(),
            bytes = source.code().len(),
            tokens = tokens.len(),
            "tokenized"
        );
        TokenizedBuffer { tokens, source }
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token<'s>> {
        self.tokens.get(i)
    }

    pub fn print_tokens(&self) {
        for token in self.tokens.iter() {
            println!("{:?}", &token);
        }
    }

    pub fn tokens(&self) -> &Vec<Token<'s>> {
        &self.tokens
    }

    /// Number of tokens, the end marker included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    // Always false, kept for the len() pairing.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn source(&self) -> &'s source::SourceBuffer<'s> {
        self.source
    }
}
