/// The enumerated type of all diagnostics Hormuz emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    LexerNote { kind: LexerDiagnosticKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerDiagnosticKind {
    /// A byte that starts no token was dropped.
    UnknownByte,

    /// A string literal ran into the end of the input and was truncated there.
    UnterminatedString,
}
