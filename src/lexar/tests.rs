#[cfg(test)]
mod lexer_tests {
    use crate::lexar::lexer::{strip_whitespace, tokenize, tokenize_with, LexOptions};
    use crate::lexar::token::{line_col, LineCol, Span, TokenKind};

    fn significant(input: &str) -> Vec<(TokenKind, &str)> {
        tokenize(input)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, t.text))
            .collect()
    }

    fn assert_covers(input: &str) {
        let tokens = tokenize(input);
        let joined: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(joined, input);

        let mut expected_start = 0;
        for tok in &tokens {
            assert_eq!(tok.span.start, expected_start, "gap before {}", tok);
            assert!(tok.span.end > tok.span.start, "zero-width token {}", tok);
            assert_eq!(&input[tok.span.start..tok.span.end], tok.text);
            expected_start = tok.span.end;
        }
        assert_eq!(expected_start, input.len());
    }

    #[test]
    fn test_basic_tokens() {
        let tokens = significant("x = 42;");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "42"),
                (TokenKind::Separator, ";"),
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize("if (x)");
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2].span, Span::new(3, 4));
        assert_eq!(tokens[3].span, Span::new(4, 5));
        assert_eq!(tokens[4].span, Span::new(5, 6));
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        let tokens = tokenize("a \t\n\n b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].text, " \t\n\n ");
    }

    #[test]
    fn test_keywords() {
        let input = "if else while function return break continue print for do \
                     switch case default true false null int bool string void";
        let tokens = significant(input);
        assert_eq!(tokens.len(), 20);
        assert!(tokens.iter().all(|(kind, _)| *kind == TokenKind::Keyword));
    }

    #[test]
    fn test_keyword_reclassification() {
        assert_eq!(significant("while"), vec![(TokenKind::Keyword, "while")]);
        assert_eq!(significant("whilex"), vec![(TokenKind::Identifier, "whilex")]);
        assert_eq!(significant("If"), vec![(TokenKind::Identifier, "If")]);
    }

    #[test]
    fn test_identifier_shape() {
        assert_eq!(significant("a_1b"), vec![(TokenKind::Identifier, "a_1b")]);
        // A leading underscore cannot start an identifier
        assert_eq!(
            significant("_a"),
            vec![(TokenKind::Unknown, "_"), (TokenKind::Identifier, "a")]
        );
    }

    #[test]
    fn test_numbers_are_integers_only() {
        assert_eq!(
            significant("3.14"),
            vec![
                (TokenKind::Number, "3"),
                (TokenKind::Separator, "."),
                (TokenKind::Number, "14"),
            ]
        );
    }

    #[test]
    fn test_invalid_number() {
        let tokens = significant("123abc");
        assert_eq!(
            tokens,
            vec![(TokenKind::Number, "123"), (TokenKind::Identifier, "abc")]
        );
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(significant("<="), vec![(TokenKind::Operator, "<=")]);

        let ops: Vec<&str> = significant("== != <= >= && || ++ -- = + - * / < > ! & |")
            .into_iter()
            .map(|(kind, text)| {
                assert_eq!(kind, TokenKind::Operator);
                text
            })
            .collect();
        assert_eq!(
            ops,
            vec![
                "==", "!=", "<=", ">=", "&&", "||", "++", "--", "=", "+", "-", "*", "/", "<",
                ">", "!", "&", "|"
            ]
        );
    }

    #[test]
    fn test_munch_is_two_chars_at_most() {
        assert_eq!(
            significant("==="),
            vec![(TokenKind::Operator, "=="), (TokenKind::Operator, "=")]
        );
        assert_eq!(
            significant("=!"),
            vec![(TokenKind::Operator, "="), (TokenKind::Operator, "!")]
        );
    }

    #[test]
    fn test_separators() {
        let tokens = significant("[ ] ( ) { } : , . ;");
        assert_eq!(tokens.len(), 10);
        assert!(tokens.iter().all(|(kind, _)| *kind == TokenKind::Separator));
    }

    #[test]
    fn test_string_literals() {
        let tokens = significant(r#"s = "hello world";"#);
        assert_eq!(tokens[2], (TokenKind::String, "\"hello world\""));
    }

    #[test]
    fn test_string_may_span_lines() {
        let tokens = significant("\"a\nb\"");
        assert_eq!(tokens, vec![(TokenKind::String, "\"a\nb\"")]);
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize("\"abc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "\"abc");
        assert_eq!(tokens[0].span, Span::new(0, 4));
    }

    #[test]
    fn test_line_comment() {
        let tokens = tokenize("x // note\ny");
        assert_eq!(tokens[2].kind, TokenKind::Comment);
        assert_eq!(tokens[2].text, "// note");
        assert_eq!(tokens[3].text, "\n");
    }

    #[test]
    fn test_block_comment() {
        let tokens = significant("a /* one\n two */ b /**/");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Comment, "/* one\n two */"),
                (TokenKind::Identifier, "b"),
                (TokenKind::Comment, "/**/"),
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_consumes_rest() {
        let tokens = significant("x /* open x = 1;");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Unknown, "/* open x = 1;"),
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_can_resume() {
        let opts = LexOptions {
            resume_after_unterminated_comment: true,
        };
        let tokens: Vec<_> = tokenize_with("/*/ x", &opts)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, t.text))
            .collect();
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Unknown, "/*"),
                (TokenKind::Operator, "/"),
                (TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_invalid_token() {
        let tokens = significant("@ #");
        assert_eq!(
            tokens,
            vec![(TokenKind::Unknown, "@"), (TokenKind::Unknown, "#")]
        );
    }

    #[test]
    fn test_non_ascii_character_is_one_unknown_token() {
        let tokens = tokenize("é=1");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "é");
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(2, 3));
    }

    #[test]
    fn test_coverage() {
        let samples = [
            "",
            "x = 1 + 2;",
            "function int add(int a, int b) { return a + b; }",
            "int arr[] = [1, 2, 3]; // trailing",
            "/* open comment",
            "\"open string",
            "a<=b>=c!=d&&e||f++--",
            "é @ # $ \u{1F600}",
            "  \n\t  ",
            "switch (x) { case 1: print(\"one\"); default: break; }",
        ];
        for input in samples {
            assert_covers(input);
        }
    }

    #[test]
    fn test_strip_whitespace_is_idempotent() {
        let tokens = tokenize("if (a) { /* c */ b = 1; }");
        let once = strip_whitespace(&tokens);
        let twice = strip_whitespace(&once);
        assert_eq!(once, twice);
        assert!(once.iter().all(|t| t.kind != TokenKind::Whitespace));
        assert!(once.iter().any(|t| t.kind == TokenKind::Comment));
    }

    #[test]
    fn test_line_col() {
        let src = "a\nbc\n  d";
        assert_eq!(line_col(src, 0), LineCol { line: 1, col: 1 });
        assert_eq!(line_col(src, 3), LineCol { line: 2, col: 2 });
        assert_eq!(line_col(src, 7), LineCol { line: 3, col: 3 });
        assert_eq!(line_col(src, 100), LineCol { line: 3, col: 4 });
    }
}
