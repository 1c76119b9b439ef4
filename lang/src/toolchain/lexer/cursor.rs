use bstr::BStr;
use tracing::trace;

use crate::toolchain::diagnostics::Diagnostic;
use crate::toolchain::diagnostics::DiagnosticConsumer;
use crate::toolchain::diagnostics::DiagnosticKind;
use crate::toolchain::diagnostics::DiagnosticLevel;
use crate::toolchain::diagnostics::DiagnosticLocation;
use crate::toolchain::diagnostics::DiagnosticMessage;
use crate::toolchain::diagnostics::LexerDiagnosticKind;
use crate::toolchain::source::SourceBuffer;

use super::keywords;
use super::token::Token;
use super::token::TokenKind;
use super::LexOptions;

/// Token iterator over a SourceBuffer.
///
/// Holds all scanning state for one pass over the input: the byte offset, the 1-based line
/// counter and the options. Yields every token except the end marker, which
/// [TokenizedBuffer](super::TokenizedBuffer) appends once the iterator runs dry.
///
/// Scanning is byte oriented. Any byte with the high bit set belongs to an identifier, which is
/// how multi-byte Persian letters end up inside a single identifier without decoding them.
pub struct Cursor<'s, 'd> {
    source: &'s SourceBuffer<'s>,
    input: &'s [u8],
    pos: usize,
    line: i32,
    options: LexOptions,
    diags: &'d mut dyn DiagnosticConsumer,
}

impl<'s, 'd> Iterator for Cursor<'s, 'd> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        loop {
            self.blank_space();

            // Collect string position at the start of the token.
            let line = self.line;
            let first = self.first()?;

            let token = match first {
                b'0'..=b'9' => Token::new(TokenKind::Number, self.number(), line),

                b'"' => Token::new(TokenKind::StringLiteral, self.string_literal(), line),

                c if is_identifier_start(c) => self.identifier_or_keyword(line),

                _ => match self.operator() {
                    Some(symbol) => Token::new(TokenKind::Operator, symbol, line),
                    None => {
                        self.unknown_byte(first);
                        continue;
                    }
                },
            };
            return Some(token);
        }
    }
}

impl<'s, 'd> Cursor<'s, 'd> {
    pub fn new(
        source: &'s SourceBuffer<'s>,
        options: LexOptions,
        diags: &'d mut dyn DiagnosticConsumer,
    ) -> Cursor<'s, 'd> {
        Cursor { source, input: source.code(), pos: 0, line: 1, options, diags }
    }

    /// The line the cursor is on. After the iterator is exhausted, the last line of the input.
    pub fn line(&self) -> i32 {
        self.line
    }

    fn first(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn rest(&self) -> &'s [u8] {
        &self.input[self.pos..]
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while self.first().is_some_and(&mut predicate) {
            self.pos += 1;
        }
    }

    fn extract_substring(&self, start: usize) -> &'s BStr {
        BStr::new(&self.input[start..self.pos])
    }

    fn blank_space(&mut self) {
        while let Some(c) = self.first() {
            if !is_blank_space(c) {
                break;
            }
            if c == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    // Digits, then at most one dot followed by more digits. `1.2.3` stops before the second dot.
    fn number(&mut self) -> &'s BStr {
        let start = self.pos;
        self.eat_while(|c| c.is_ascii_digit());
        if self.first() == Some(b'.') {
            self.pos += 1;
            self.eat_while(|c| c.is_ascii_digit());
        }
        self.extract_substring(start)
    }

    // Returns the literal body without quotes. A backslash always takes the next byte with it, so
    // `\"` never terminates the literal. No escape is decoded.
    fn string_literal(&mut self) -> &'s BStr {
        let line = self.line;
        // Opening quote.
        self.pos += 1;
        let start = self.pos;
        while let Some(c) = self.first() {
            match c {
                b'"' => break,
                b'\\' if self.pos + 1 < self.input.len() => self.pos += 2,
                _ => self.pos += 1,
            }
        }
        let body = self.extract_substring(start);
        if self.first() == Some(b'"') {
            self.pos += 1;
        } else {
            trace!(line, "string literal truncated at end of input");
            self.note(
                LexerDiagnosticKind::UnterminatedString,
                line,
                "string literal is not terminated, truncated at end of input".to_string(),
            );
        }
        body
    }

    fn identifier_or_keyword(&mut self, line: i32) -> Token<'s> {
        if self.options.join_phrases {
            if let Some((len, replacement)) = keywords::match_phrase(self.rest()) {
                self.pos += len;
                return Token::new(TokenKind::Keyword, replacement, line);
            }
        }

        let start = self.pos;
        self.eat_while(is_identifier_continue);
        let identifier = self.extract_substring(start);
        match keywords::lookup(identifier) {
            Some(replacement) => Token::new(TokenKind::Keyword, replacement, line),
            None => Token::new(TokenKind::Identifier, identifier, line),
        }
    }

    fn operator(&mut self) -> Option<&'static str> {
        let rest = self.rest();
        let symbol = keywords::match_symbol(rest).or_else(|| keywords::match_punctuation(rest))?;
        self.pos += symbol.len();
        Some(symbol)
    }

    fn unknown_byte(&mut self, byte: u8) {
        trace!(line = self.line, byte, "dropping unrecognized byte");
        self.note(
            LexerDiagnosticKind::UnknownByte,
            self.line,
            format!("dropped unrecognized byte {:#04x}", byte),
        );
        self.pos += 1;
    }

    fn note(&mut self, kind: LexerDiagnosticKind, line: i32, body: String) {
        // We build messages by hand, the lexer has no token to anchor a location to yet.
        let location = DiagnosticLocation { file_name: self.source.file_name(), line_number: line };
        let msg = DiagnosticMessage { kind: DiagnosticKind::LexerNote { kind }, location, body };
        self.diags.handle_diagnostic(Diagnostic::new(DiagnosticLevel::Note, msg));
    }
}

/// The C locale `isspace` set.
pub(super) fn is_blank_space(c: u8) -> bool {
    matches!(
        c,
        b'\t'     // \t
        | b'\n'   // \n
        | 0x0B    // vertical tab
        | 0x0C    // form feed
        | b'\r'   // \r
        | b' '
    )
}

pub(super) fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || !c.is_ascii()
}

pub(super) fn is_identifier_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || !c.is_ascii()
}
