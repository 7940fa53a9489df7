//! Tests for error reporting
//!
//! Covers error message wording, offsets recorded at the failure point,
//! suggestions, and whether scanning can continue after each error kind.

#[cfg(test)]
mod tests {
    use crate::error::{ConversionError, ScanError};
    use crate::scanner::TokenScanner;
    use crate::source::Input;
    use std::io::{self, BufRead, Read};

    #[test]
    fn test_unterminated_literal_message() {
        let mut scanner = TokenScanner::new("say \"hello");
        scanner.scan_strings();
        scanner.ignore_whitespace();
        assert_eq!(scanner.next_token().unwrap(), "say");

        let err = scanner.next_token().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unterminated string literal opened with \" (input ended at offset 10)"
        );
        assert!(err.is_recoverable());
        assert_eq!(err.suggest_fix(), vec!["Close the literal with a matching \""]);
    }

    #[test]
    fn test_scanning_continues_after_unterminated_literal_in_stream() {
        let input = io::Cursor::new("'open\nnext line\n");
        let mut scanner = TokenScanner::new(Input::reader(input));
        scanner.scan_strings();
        scanner.ignore_whitespace();

        // the literal consumes the rest of the stream before failing
        assert!(matches!(
            scanner.next_token(),
            Err(ScanError::UnterminatedLiteral { offset: 16, .. })
        ));
        assert_eq!(scanner.next_token().unwrap(), "");
    }

    #[test]
    fn test_invariant_violation_message() {
        let mut scanner = TokenScanner::new("");
        scanner.save_token("a".to_string()).unwrap();
        let err = scanner.save_token("b".to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Internal error: save_token(\"b\") while \"a\" is already saved"
        );
        assert!(!err.is_recoverable());
        assert!(!err.suggest_fix().is_empty());
    }

    #[test]
    fn test_token_mismatch_messages() {
        let missing = ScanError::TokenMismatch {
            expected: ";".to_string(),
            found: None,
        };
        assert_eq!(missing.to_string(), "missing `;`");

        let found = ScanError::TokenMismatch {
            expected: ";".to_string(),
            found: Some("}".to_string()),
        };
        assert_eq!(found.to_string(), "found `}` when expecting `;`");
    }

    #[test]
    fn test_conversion_errors_wrap() {
        let scanner = TokenScanner::new("");

        let err = scanner.number_value("12abc").unwrap_err();
        assert!(matches!(
            err,
            ScanError::Conversion(ConversionError::InvalidNumber { ref token }) if token == "12abc"
        ));
        assert_eq!(
            err.to_string(),
            "Conversion error: '12abc' is not a valid number"
        );

        let err = scanner.string_value(r"'\z'").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conversion error: Invalid escape sequence '\\z' at index 1"
        );
        assert_eq!(err.suggest_fix().len(), 1);
    }

    #[test]
    fn test_conversion_error_suggestions() {
        let hex = ConversionError::InvalidEscape {
            sequence: "x4".to_string(),
            index: 1,
        };
        assert_eq!(hex.suggest_fix(), vec!["Use \\xHH with exactly two hex digits"]);

        let unicode = ConversionError::InvalidEscape {
            sequence: "uD800".to_string(),
            index: 1,
        };
        assert_eq!(unicode.suggest_fix().len(), 2);

        let delimiter = ConversionError::UnescapedDelimiter {
            delimiter: '"',
            index: 3,
        };
        assert_eq!(delimiter.suggest_fix(), vec!["Escape the quote as \\\""]);

        let number = ConversionError::InvalidNumber {
            token: "x".to_string(),
        };
        assert!(number.suggest_fix().is_empty());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::other("disk on fire"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_io_errors_propagate() {
        let mut scanner = TokenScanner::new(Input::reader(FailingReader));
        let err = scanner.next_token().unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
        assert_eq!(err.to_string(), "IO error: disk on fire");
        assert!(err.is_recoverable());
    }
}
