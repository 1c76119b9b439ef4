//! The buffer-to-buffer pipeline: source, lexer, generator.

pub mod diagnostics;
pub mod generator;
pub mod lexer;
pub mod source;

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use diagnostics::DiagnosticConsumer;
use generator::Generator;
use lexer::{LexOptions, TokenizedBuffer};
use source::SourceBuffer;

/// Lexes `source` and emits the substituted token stream.
pub fn transpile(
    source: &SourceBuffer,
    options: LexOptions,
    diags: &mut impl DiagnosticConsumer,
) -> Vec<u8> {
    let tb = TokenizedBuffer::tokenize_with_options(source, options, diags);
    Generator::emit(tb.tokens())
}

/// Transpiles the file at `input` into `output`, replacing any existing output file.
///
/// The output file is only created once the input has been read and lexed.
pub fn transpile_file(
    input: &Path,
    output: &Path,
    options: LexOptions,
    diags: &mut impl DiagnosticConsumer,
) -> Result<(), Error> {
    let source = SourceBuffer::new_from_file(input)
        .map_err(|source| Error::OpenInput { path: input.to_path_buf(), source })?;
    let generated = transpile(&source, options, diags);
    diags.flush();

    let mut file = std::fs::File::create(output)
        .map_err(|source| Error::OpenOutput { path: output.to_path_buf(), source })?;
    file.write_all(&generated)
        .and_then(|()| file.flush())
        .map_err(|source| Error::WriteOutput { path: output.to_path_buf(), source })?;

    debug!(input = %input.display(), output = %output.display(), bytes = generated.len(), "wrote output");
    Ok(())
}
