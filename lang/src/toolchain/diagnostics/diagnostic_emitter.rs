use std::fmt;
use std::io::Write;

use super::DiagnosticKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Note,
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticLevel::Note => "note",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        })
    }
}

/// A location in code referred to by the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticLocation<'s> {
    pub file_name: &'s str,
    pub line_number: i32,
}

impl<'s> fmt::Display for DiagnosticLocation<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name)?;
        if self.line_number > 0 {
            f.write_fmt(format_args!(":{}", self.line_number))?;
        }
        fmt::Result::Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage<'s> {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation<'s>,
    pub body: String,
}

/// A complete Diagnostic, a message plus the level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'s> {
    pub level: DiagnosticLevel,
    pub message: DiagnosticMessage<'s>,
}

impl<'s> Diagnostic<'s> {
    pub fn new(level: DiagnosticLevel, message: DiagnosticMessage<'s>) -> Diagnostic<'s> {
        Diagnostic { level, message }
    }
}

impl<'s> fmt::Display for Diagnostic<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}: {}", self.message.location, self.level, self.message.body))
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: Diagnostic);
    fn flush(&mut self);
}

/// Drops every diagnostic. Lexical anomalies stay silent.
pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: Diagnostic) {}
    fn flush(&mut self) {}
}

pub struct StreamDiagnosticConsumer<W: std::io::Write> {
    stream: std::io::BufWriter<W>,
}

impl<W: std::io::Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream) }
    }

    /// Flushes and hands back the underlying stream.
    pub fn into_inner(self) -> std::io::Result<W> {
        self.stream.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: std::io::Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    // Diagnostics are best effort, a failing stream must not stop the transpiler.
    fn handle_diagnostic(&mut self, diag: Diagnostic) {
        let _ = writeln!(self.stream, "{}", diag);
    }

    fn flush(&mut self) {
        let _ = self.stream.flush();
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<impl std::io::Write> {
    StreamDiagnosticConsumer::new(std::io::stderr())
}
