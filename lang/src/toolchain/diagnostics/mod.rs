//! Tools for the production and management of diagnostic feedback from the toolchain.
//!
//! The lexer never fails: anomalies in the input (bytes it cannot classify, string literals cut
//! off by the end of the input) are recovered from silently. They are still reported as
//! [Diagnostic] notes to a [DiagnosticConsumer], which decides whether the user ever sees them.
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

pub use diagnostic_emitter::console_diagnostic_consumer;
pub use diagnostic_emitter::Diagnostic;
pub use diagnostic_emitter::DiagnosticConsumer;
pub use diagnostic_emitter::DiagnosticLevel;
pub use diagnostic_emitter::DiagnosticLocation;
pub use diagnostic_emitter::DiagnosticMessage;
pub use diagnostic_emitter::NullDiagnosticConsumer;
pub use diagnostic_emitter::StreamDiagnosticConsumer;
pub use diagnostic_kind::DiagnosticKind;
pub use diagnostic_kind::LexerDiagnosticKind;
