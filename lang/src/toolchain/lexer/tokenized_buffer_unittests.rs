#[cfg(test)]
mod tests {
    use crate::hormuz;
    use crate::toolchain::diagnostics::Diagnostic;
    use crate::toolchain::diagnostics::DiagnosticConsumer;
    use crate::toolchain::diagnostics::DiagnosticKind;
    use crate::toolchain::diagnostics::DiagnosticLevel;
    use crate::toolchain::diagnostics::LexerDiagnosticKind;
    use crate::toolchain::diagnostics::NullDiagnosticConsumer;
    use crate::toolchain::source;

    use crate::toolchain::lexer::token::Token;
    use crate::toolchain::lexer::token::TokenKind::*;

    use crate::toolchain::lexer::LexOptions;
    use crate::toolchain::lexer::TokenizedBuffer;

    use pretty_assertions::assert_eq;

    // Lexing helper function to compare expected lexing to the tokens, end marker included.
    fn check_lexing(source: &source::SourceBuffer, expect: Vec<Token>) {
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(source, &mut diags);
        assert_eq!(buffer.tokens(), &expect);
    }

    #[derive(Default)]
    struct RecordingDiagnosticConsumer {
        seen: Vec<(DiagnosticLevel, DiagnosticKind, i32, String)>,
    }

    impl DiagnosticConsumer for RecordingDiagnosticConsumer {
        fn handle_diagnostic(&mut self, diag: Diagnostic) {
            self.seen.push((
                diag.level,
                diag.message.kind,
                diag.message.location.line_number,
                diag.to_string(),
            ));
        }
        fn flush(&mut self) {}
    }

    #[test]
    fn smoke_test() {
        check_lexing(
            hormuz!(r#"اگر ( صحیح x برابر 5 ) { جاپ ( "hi" ) ; }"#),
            vec![
                Token::new(Keyword, "if", 1),
                Token::new(Operator, "(", 1),
                Token::new(Keyword, "int", 1),
                Token::new(Identifier, "x", 1),
                Token::new(Keyword, "==", 1),
                Token::new(Number, "5", 1),
                Token::new(Operator, ")", 1),
                Token::new(Operator, "{", 1),
                Token::new(Keyword, "printf", 1),
                Token::new(Operator, "(", 1),
                Token::new(StringLiteral, "hi", 1),
                Token::new(Operator, ")", 1),
                Token::new(Operator, ";", 1),
                Token::new(Operator, "}", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn empty_input() {
        check_lexing(hormuz!(""), vec![Token::end(1)]);
        check_lexing(hormuz!("   \t "), vec![Token::end(1)]);
        check_lexing(hormuz!("\n\n"), vec![Token::end(3)]);
    }

    #[test]
    fn keywords() {
        check_lexing(hormuz!("اگر"), vec![Token::new(Keyword, "if", 1), Token::end(1)]);
        check_lexing(
            hormuz!("وگرنه تابع اشاره رشته اعشاری"),
            vec![
                Token::new(Keyword, "else", 1),
                Token::new(Keyword, "void", 1),
                Token::new(Keyword, "void*", 1),
                Token::new(Keyword, "char*", 1),
                Token::new(Keyword, "double", 1),
                Token::end(1),
            ],
        );
        check_lexing(
            hormuz!("و یا نابرابر بزرگتر"),
            vec![
                Token::new(Keyword, "&&", 1),
                Token::new(Keyword, "||", 1),
                Token::new(Keyword, "!=", 1),
                Token::new(Keyword, ">", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn keyword_needs_whole_identifier() {
        check_lexing(
            hormuz!("اگرچه _اگر اگر1"),
            vec![
                Token::new(Identifier, "اگرچه", 1),
                Token::new(Identifier, "_اگر", 1),
                Token::new(Identifier, "اگر1", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn identifiers() {
        check_lexing(
            hormuz!("myVar _tmp x1 متغیر_2 aمتغیر"),
            vec![
                Token::new(Identifier, "myVar", 1),
                Token::new(Identifier, "_tmp", 1),
                Token::new(Identifier, "x1", 1),
                Token::new(Identifier, "متغیر_2", 1),
                Token::new(Identifier, "aمتغیر", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn identifier_stops_at_operator() {
        check_lexing(
            hormuz!("i++"),
            vec![Token::new(Identifier, "i", 1), Token::new(Operator, "++", 1), Token::end(1)],
        );
    }

    #[test]
    fn numbers() {
        check_lexing(
            hormuz!("0 42 3.14 5."),
            vec![
                Token::new(Number, "0", 1),
                Token::new(Number, "42", 1),
                Token::new(Number, "3.14", 1),
                Token::new(Number, "5.", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn number_takes_one_dot() {
        // The second dot is in neither operator table and is dropped, the digits after it start
        // a fresh number.
        check_lexing(
            hormuz!("12.5.6"),
            vec![Token::new(Number, "12.5", 1), Token::new(Number, "6", 1), Token::end(1)],
        );
        check_lexing(
            hormuz!("1.2.3.4"),
            vec![Token::new(Number, "1.2", 1), Token::new(Number, "3.4", 1), Token::end(1)],
        );
    }

    #[test]
    fn number_then_identifier() {
        check_lexing(
            hormuz!("1e5 2x"),
            vec![
                Token::new(Number, "1", 1),
                Token::new(Identifier, "e5", 1),
                Token::new(Number, "2", 1),
                Token::new(Identifier, "x", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn strings() {
        check_lexing(
            hormuz!(r#""سلام" "" "a b""#),
            vec![
                Token::new(StringLiteral, "سلام", 1),
                Token::new(StringLiteral, "", 1),
                Token::new(StringLiteral, "a b", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn string_escapes_kept() {
        check_lexing(
            hormuz!(r#""\"" "\t\n\\" "\k""#),
            vec![
                Token::new(StringLiteral, r#"\""#, 1),
                Token::new(StringLiteral, r#"\t\n\\"#, 1),
                Token::new(StringLiteral, r#"\k"#, 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn unterminated_string() {
        check_lexing(hormuz!(r#"""#), vec![Token::new(StringLiteral, "", 1), Token::end(1)]);
        check_lexing(
            hormuz!(r#"x = "open ended ;"#),
            vec![
                Token::new(Identifier, "x", 1),
                Token::new(Operator, "=", 1),
                Token::new(StringLiteral, "open ended ;", 1),
                Token::end(1),
            ],
        );
        // A trailing backslash is consumed by itself.
        check_lexing(hormuz!(r#""ab\"#), vec![Token::new(StringLiteral, r#"ab\"#, 1), Token::end(1)]);
    }

    #[test]
    fn operators() {
        check_lexing(hormuz!("=="), vec![Token::new(Operator, "==", 1), Token::end(1)]);
        check_lexing(
            hormuz!("!= ++ -- && || = ! < > % * / + - , ;"),
            vec![
                Token::new(Operator, "!=", 1),
                Token::new(Operator, "++", 1),
                Token::new(Operator, "--", 1),
                Token::new(Operator, "&&", 1),
                Token::new(Operator, "||", 1),
                Token::new(Operator, "=", 1),
                Token::new(Operator, "!", 1),
                Token::new(Operator, "<", 1),
                Token::new(Operator, ">", 1),
                Token::new(Operator, "%", 1),
                Token::new(Operator, "*", 1),
                Token::new(Operator, "/", 1),
                Token::new(Operator, "+", 1),
                Token::new(Operator, "-", 1),
                Token::new(Operator, ",", 1),
                Token::new(Operator, ";", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn operators_without_spaces() {
        check_lexing(
            hormuz!("===!=="),
            vec![
                Token::new(Operator, "==", 1),
                Token::new(Operator, "=", 1),
                Token::new(Operator, "!=", 1),
                Token::new(Operator, "=", 1),
                Token::end(1),
            ],
        );
        check_lexing(
            hormuz!("<=>="),
            vec![
                Token::new(Operator, "<", 1),
                Token::new(Operator, "=", 1),
                Token::new(Operator, ">", 1),
                Token::new(Operator, "=", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn brackets_come_from_the_fallback_set() {
        check_lexing(
            hormuz!("a[0]"),
            vec![
                Token::new(Identifier, "a", 1),
                Token::new(Operator, "[", 1),
                Token::new(Number, "0", 1),
                Token::new(Operator, "]", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn unknown_bytes_are_dropped() {
        check_lexing(
            hormuz!("a @ b # & | . : ? ~ ^ $ ' `"),
            vec![Token::new(Identifier, "a", 1), Token::new(Identifier, "b", 1), Token::end(1)],
        );
        check_lexing(
            hormuz!("x\0y"),
            vec![Token::new(Identifier, "x", 1), Token::new(Identifier, "y", 1), Token::end(1)],
        );
    }

    #[test]
    fn lone_ampersand_and_pipe_are_dropped() {
        check_lexing(
            hormuz!("&a|b"),
            vec![Token::new(Identifier, "a", 1), Token::new(Identifier, "b", 1), Token::end(1)],
        );
    }

    #[test]
    fn non_utf8_input() {
        let source = source::SourceBuffer::new_from_bytes(b"\xd8\xa7\xff x", "bytes");
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(&source, &mut diags);
        assert_eq!(
            buffer.tokens(),
            &vec![
                Token::new(Identifier, b"\xd8\xa7\xff", 1),
                Token::new(Identifier, "x", 1),
                Token::end(1),
            ]
        );
    }

    #[test]
    fn line_numbers() {
        check_lexing(
            hormuz!("صحیح x;\n\nx = 1;\r\n  بازگردان x;\n"),
            vec![
                Token::new(Keyword, "int", 1),
                Token::new(Identifier, "x", 1),
                Token::new(Operator, ";", 1),
                Token::new(Identifier, "x", 3),
                Token::new(Operator, "=", 3),
                Token::new(Number, "1", 3),
                Token::new(Operator, ";", 3),
                Token::new(Keyword, "return", 4),
                Token::new(Identifier, "x", 4),
                Token::new(Operator, ";", 4),
                Token::end(5),
            ],
        );
    }

    #[test]
    fn newlines_in_strings_are_not_counted() {
        check_lexing(
            hormuz!("\"a\nb\"\nx"),
            vec![Token::new(StringLiteral, "a\nb", 1), Token::new(Identifier, "x", 2), Token::end(2)],
        );
    }

    #[test]
    fn other_blank_space() {
        check_lexing(
            hormuz!("a\x0bb\x0cc\rd"),
            vec![
                Token::new(Identifier, "a", 1),
                Token::new(Identifier, "b", 1),
                Token::new(Identifier, "c", 1),
                Token::new(Identifier, "d", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn phrase_limitation_by_default() {
        check_lexing(
            hormuz!("درحالی که"),
            vec![
                Token::new(Identifier, "درحالی", 1),
                Token::new(Identifier, "که", 1),
                Token::end(1),
            ],
        );
    }

    #[test]
    fn phrase_joining() {
        let mut diags = NullDiagnosticConsumer {};
        let source = hormuz!("درحالی  که(x)\nدرحالی\nکه");
        let buffer = TokenizedBuffer::tokenize_with_options(
            source,
            LexOptions { join_phrases: true },
            &mut diags,
        );
        assert_eq!(
            buffer.tokens(),
            &vec![
                Token::new(Keyword, "while", 1),
                Token::new(Operator, "(", 1),
                Token::new(Identifier, "x", 1),
                Token::new(Operator, ")", 1),
                Token::new(Identifier, "درحالی", 2),
                Token::new(Identifier, "که", 3),
                Token::end(3),
            ]
        );
    }

    #[test]
    fn anomalies_are_reported_as_notes() {
        let mut diags = RecordingDiagnosticConsumer::default();
        let source = source::SourceBuffer::new_from_string("x @\n\"open", "in.hz");
        let buffer = TokenizedBuffer::tokenize(&source, &mut diags);
        assert_eq!(buffer.len(), 3);
        assert_eq!(
            diags.seen,
            vec![
                (
                    DiagnosticLevel::Note,
                    DiagnosticKind::LexerNote { kind: LexerDiagnosticKind::UnknownByte },
                    1,
                    "in.hz:1: note: dropped unrecognized byte 0x40".to_string(),
                ),
                (
                    DiagnosticLevel::Note,
                    DiagnosticKind::LexerNote { kind: LexerDiagnosticKind::UnterminatedString },
                    2,
                    "in.hz:2: note: string literal is not terminated, truncated at end of input"
                        .to_string(),
                ),
            ]
        );
    }

    #[test]
    fn clean_input_reports_nothing() {
        let mut diags = RecordingDiagnosticConsumer::default();
        let _ = TokenizedBuffer::tokenize(hormuz!("اگر (x) { جاپ(\"ok\"); }"), &mut diags);
        assert!(diags.seen.is_empty());
    }

    #[test]
    fn accessors() {
        let mut diags = NullDiagnosticConsumer {};
        let source = source::SourceBuffer::new_from_string("a b", "acc.hz");
        let buffer = TokenizedBuffer::tokenize(&source, &mut diags);
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.token_at(1), Some(&Token::new(Identifier, "b", 1)));
        assert_eq!(buffer.token_at(2).map(|t| t.is_end()), Some(true));
        assert_eq!(buffer.token_at(3), None);
        assert_eq!(buffer.source().file_name(), "acc.hz");
    }

    mod properties {
        use crate::toolchain::diagnostics::NullDiagnosticConsumer;
        use crate::toolchain::generator::Generator;
        use crate::toolchain::lexer::token::TokenKind;
        use crate::toolchain::lexer::{LexOptions, TokenizedBuffer};
        use crate::toolchain::source::SourceBuffer;
        use proptest::prelude::*;

        fn tokenize(bytes: &[u8], options: LexOptions) -> Vec<(TokenKind, Vec<u8>, i32)> {
            let source = SourceBuffer::new_from_bytes(bytes, "prop");
            let mut diags = NullDiagnosticConsumer {};
            let buffer = TokenizedBuffer::tokenize_with_options(&source, options, &mut diags);
            buffer.tokens().iter().map(|t| (t.kind, t.string.to_vec(), t.line)).collect()
        }

        proptest! {
            #[test]
            fn exactly_one_trailing_end(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                for options in [LexOptions::default(), LexOptions { join_phrases: true }] {
                    let tokens = tokenize(&bytes, options);
                    let ends = tokens.iter().filter(|t| t.0 == TokenKind::EndOfInput).count();
                    prop_assert_eq!(ends, 1);
                    prop_assert_eq!(tokens.last().map(|t| t.0), Some(TokenKind::EndOfInput));
                }
            }

            #[test]
            fn deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                prop_assert_eq!(
                    tokenize(&bytes, LexOptions::default()),
                    tokenize(&bytes, LexOptions::default())
                );
            }

            #[test]
            fn lines_never_decrease(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                let tokens = tokenize(&bytes, LexOptions::default());
                for pair in tokens.windows(2) {
                    prop_assert!(pair[0].2 <= pair[1].2);
                }
                prop_assert!(tokens[0].2 >= 1);
            }

            #[test]
            fn scanned_tokens_are_not_empty(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                for (kind, text, _) in tokenize(&bytes, LexOptions::default()) {
                    if kind != TokenKind::StringLiteral {
                        prop_assert!(!text.is_empty());
                    }
                }
            }

            #[test]
            fn generated_token_count_matches(
                words in proptest::collection::vec(
                    prop_oneof![
                        Just("اگر"), Just("صحیح"), Just("x"), Just("42"), Just("3.5"),
                        Just("=="), Just("("), Just(")"), Just(";"), Just("برابر"), Just("[")
                    ],
                    0..32,
                )
            ) {
                let input = words.join(" ");
                let tokens = tokenize(input.as_bytes(), LexOptions::default());
                let source = SourceBuffer::new_from_string(&input, "prop");
                let mut diags = NullDiagnosticConsumer {};
                let buffer = TokenizedBuffer::tokenize(&source, &mut diags);
                let output = Generator::emit(buffer.tokens());
                let emitted = output.split(|&b| b == b' ').filter(|w| !w.is_empty()).count();
                prop_assert_eq!(emitted, tokens.len() - 1);
                prop_assert_eq!(emitted, words.len());
            }
        }
    }
}
