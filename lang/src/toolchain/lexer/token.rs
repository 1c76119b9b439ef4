use bstr::BStr;
use std::fmt::Display;

/// Represents a single lexical token of Hormuz source.
///
/// The lexer drops blank space and unrecognized bytes, so unlike the input string the token
/// sequence does not cover every byte. Keyword and operator tokens point into the static mapping
/// tables rather than the source, their `string` is the text that will be emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of Token.
    pub kind: TokenKind,

    // The text emitted for the Token. For string literals this excludes the quotes.
    pub string: &'a BStr,

    // The 1-based line the Token started on.
    pub line: i32,
}

assert_impl_all!(Token<'static>: Send, Sync, Copy);

impl<'a> Token<'a> {
    pub const END_MARKER: &'static str = "<eof>";

    pub fn new<B: ?Sized + AsRef<[u8]>>(kind: TokenKind, string: &'a B, line: i32) -> Token<'a> {
        Token { kind, string: BStr::new(string), line }
    }

    pub fn end(line: i32) -> Token<'a> {
        Token { kind: TokenKind::EndOfInput, string: BStr::new(Self::END_MARKER), line }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// An enumeration of all possible Token types in Hormuz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Terminates every token sequence exactly once. Generation stops here.
    EndOfInput,

    /// A run of ASCII letters, digits, underscores or non-ASCII bytes that did not match the
    /// keyword table, passed through untouched.
    Identifier,

    /// Decimal digits with at most one dot, `12` or `12.5` for example.
    Number,

    /// A double-quoted literal. The quotes are stripped and escapes are kept as written.
    StringLiteral,

    /// A localized keyword, already replaced with its ASCII text.
    Keyword,

    /// An ASCII operator or punctuation symbol.
    Operator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
        };
        f.write_str(s)
    }
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            // The end marker text carries no information.
            TokenKind::EndOfInput => f.write_fmt(format_args!("{}", self.kind)),
            _ => f.write_fmt(format_args!("{} '{}'", self.kind, self.string)),
        }
    }
}
