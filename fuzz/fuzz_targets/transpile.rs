#![no_main]

use hormuz::toolchain::lexer::LexOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let source =
        hormuz::toolchain::source::SourceBuffer::new_from_bytes(data, "fuzz_targets/transpile.rs");
    let mut diags = hormuz::toolchain::diagnostics::NullDiagnosticConsumer {};
    let _ = hormuz::toolchain::transpile(&source, LexOptions { join_phrases: true }, &mut diags);
});
