#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let source = hormuz::toolchain::source::SourceBuffer::new_from_bytes(data, "fuzz_targets/lex.rs");
    let mut diags = hormuz::toolchain::diagnostics::NullDiagnosticConsumer {};
    let tb = hormuz::toolchain::lexer::TokenizedBuffer::tokenize(&source, &mut diags);
    assert!(tb.tokens().last().is_some_and(|t| t.is_end()));
});
