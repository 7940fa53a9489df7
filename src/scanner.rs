//! Token scanner
//!
//! [`TokenScanner`] pulls characters from its [`Input`], picks a sub-scanner
//! from the first character of each token and returns the token text. The
//! empty string marks end of input.

use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::literal::{self, is_quote};
use crate::number;
use crate::source::{CharSource, Input};
use crate::token::TokenType;
use std::fmt;
use tracing::{trace, warn};

const MAX_DISPLAY_LENGTH: usize = 20;

/// Configurable scanner splitting input into word, number, string and
/// operator tokens
///
/// ```
/// use token_scanner::TokenScanner;
///
/// let mut scanner = TokenScanner::new("x = 3.5e2");
/// scanner.ignore_whitespace();
/// scanner.scan_numbers();
///
/// assert_eq!(scanner.next_token()?, "x");
/// assert_eq!(scanner.next_token()?, "=");
/// assert_eq!(scanner.next_token()?, "3.5e2");
/// assert!(!scanner.has_more_tokens()?);
/// # Ok::<(), token_scanner::ScanError>(())
/// ```
pub struct TokenScanner<'a> {
    /// Character input with pushback
    source: CharSource<'a>,
    /// Scanner configuration
    config: ScannerConfig,
    /// Token pushed back by `save_token`
    saved_token: Option<String>,
    /// Set once iteration hit end of input or an error
    exhausted: bool,
}

impl<'a> TokenScanner<'a> {
    /// Creates a scanner with default configuration
    pub fn new(input: impl Into<Input<'a>>) -> Self {
        Self::with_config(input, ScannerConfig::default())
    }

    /// Creates a scanner with custom configuration
    pub fn with_config(input: impl Into<Input<'a>>, config: ScannerConfig) -> Self {
        Self {
            source: CharSource::new(input.into()),
            config,
            saved_token: None,
            exhausted: false,
        }
    }

    /// Replaces the input, discarding any pushed-back characters and tokens
    pub fn set_input(&mut self, input: impl Into<Input<'a>>) {
        self.source.reset(input.into());
        self.saved_token = None;
        self.exhausted = false;
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Discards whitespace before each token
    pub fn ignore_whitespace(&mut self) {
        self.config.ignore_whitespace = true;
    }

    /// Discards `//` and `/* */` comments
    pub fn ignore_comments(&mut self) {
        self.config.ignore_comments = true;
    }

    /// Scans tokens starting with a digit as number literals
    pub fn scan_numbers(&mut self) {
        self.config.scan_numbers = true;
    }

    /// Scans tokens starting with a quote as string literals
    pub fn scan_strings(&mut self) {
        self.config.scan_strings = true;
    }

    /// Allows the given characters in word tokens
    pub fn add_word_characters(&mut self, chars: &str) {
        self.config.add_word_characters(chars);
    }

    /// Registers a multi-character operator
    pub fn add_operator(&mut self, op: &str) {
        self.config.add_operator(op);
    }

    /// Returns the next token, or the empty string at end of input
    pub fn next_token(&mut self) -> Result<String, ScanError> {
        if let Some(token) = self.saved_token.take() {
            return Ok(token);
        }

        loop {
            if self.config.ignore_whitespace {
                self.skip_separators()?;
            }
            let Some(ch) = self.source.get_char()? else {
                return Ok(String::new());
            };

            if ch == '/' && self.config.ignore_comments {
                match self.source.get_char()? {
                    Some('/') => {
                        self.skip_line_comment()?;
                        continue;
                    }
                    Some('*') => {
                        self.skip_block_comment()?;
                        continue;
                    }
                    Some(next) => self.source.save_char(next),
                    None => {}
                }
            }

            if is_quote(ch) && self.config.scan_strings {
                self.source.save_char(ch);
                return literal::scan_string(&mut self.source);
            }
            if ch.is_ascii_digit() && self.config.scan_numbers {
                self.source.save_char(ch);
                return number::scan_number(&mut self.source);
            }
            if self.config.is_word_character(ch) {
                self.source.save_char(ch);
                return self.scan_word();
            }
            return self.scan_operator(ch);
        }
    }

    /// Returns true if another token is available, without consuming it
    pub fn has_more_tokens(&mut self) -> Result<bool, ScanError> {
        let token = self.next_token()?;
        let more = !token.is_empty();
        self.save_token(token)?;
        Ok(more)
    }

    /// Pushes a token back so the next `next_token` returns it
    ///
    /// Only one token can be pending; saving a second one is a misuse of the
    /// pushback protocol and is reported as `InvariantViolation`.
    pub fn save_token(&mut self, token: String) -> Result<(), ScanError> {
        if let Some(pending) = &self.saved_token {
            warn!(pending = %pending, rejected = %token, "second token saved");
            return Err(ScanError::InvariantViolation {
                message: format!("save_token(\"{token}\") while \"{pending}\" is already saved"),
            });
        }
        self.saved_token = Some(token);
        Ok(())
    }

    /// Reads the next token and checks that it is `expected`
    pub fn verify_token(&mut self, expected: &str) -> Result<(), ScanError> {
        let token = self.next_token()?;
        if token == expected {
            return Ok(());
        }
        Err(ScanError::TokenMismatch {
            expected: expected.to_string(),
            found: (!token.is_empty()).then_some(token),
        })
    }

    /// Returns the input offset, in characters, of the next unread token
    pub fn position(&self) -> usize {
        let saved = self
            .saved_token
            .as_ref()
            .map_or(0, |token| token.chars().count());
        self.source.offset().saturating_sub(saved)
    }

    /// Classifies a token by its first character
    pub fn token_type(&self, token: &str) -> TokenType {
        let Some(ch) = token.chars().next() else {
            return TokenType::Eof;
        };
        if ch.is_whitespace() {
            TokenType::Separator
        } else if is_quote(ch) {
            TokenType::String
        } else if ch.is_ascii_digit() {
            TokenType::Number
        } else if self.config.is_word_character(ch) {
            TokenType::Word
        } else {
            TokenType::Operator
        }
    }

    /// Decodes a quoted string token into its value
    pub fn string_value(&self, token: &str) -> Result<String, ScanError> {
        Ok(literal::decode_string_literal(token)?)
    }

    /// Converts a number token into its value
    pub fn number_value(&self, token: &str) -> Result<f64, ScanError> {
        Ok(number::parse_number(token)?)
    }

    /// Returns true if `ch` may appear in a word token
    pub fn is_word_character(&self, ch: char) -> bool {
        self.config.is_word_character(ch)
    }

    /// Returns true if `token` is a word that does not start with a digit
    pub fn is_valid_identifier(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match chars.next() {
            Some(first) if self.is_word_character(first) && !first.is_ascii_digit() => {
                chars.all(|ch| self.is_word_character(ch))
            }
            _ => false,
        }
    }

    /// Discards whitespace up to the next non-whitespace character
    pub fn skip_whitespace(&mut self) -> Result<(), ScanError> {
        while let Some(ch) = self.source.get_char()? {
            if !ch.is_whitespace() {
                self.source.save_char(ch);
                break;
            }
        }
        Ok(())
    }

    /// Discards whitespace that is not itself a registered operator
    fn skip_separators(&mut self) -> Result<(), ScanError> {
        while let Some(ch) = self.source.get_char()? {
            if !ch.is_whitespace() || self.is_single_char_operator(ch) {
                self.source.save_char(ch);
                break;
            }
        }
        Ok(())
    }

    fn is_single_char_operator(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.config.is_operator(ch.encode_utf8(&mut buf))
    }

    fn skip_line_comment(&mut self) -> Result<(), ScanError> {
        trace!(offset = self.source.offset(), "skipping line comment");
        while let Some(ch) = self.source.get_char()? {
            if ch == '\n' || ch == '\r' {
                break;
            }
        }
        Ok(())
    }

    /// Skips to the first `*/`; end of input also ends the comment
    ///
    /// The `*` of the opener counts, so `/*/` is a complete comment.
    fn skip_block_comment(&mut self) -> Result<(), ScanError> {
        trace!(offset = self.source.offset(), "skipping block comment");
        let mut prev = Some('*');
        while let Some(ch) = self.source.get_char()? {
            if prev == Some('*') && ch == '/' {
                break;
            }
            prev = Some(ch);
        }
        Ok(())
    }

    fn scan_word(&mut self) -> Result<String, ScanError> {
        let mut token = String::new();
        while let Some(ch) = self.source.get_char()? {
            if !self.config.is_word_character(ch) {
                self.source.save_char(ch);
                break;
            }
            token.push(ch);
        }
        Ok(token)
    }

    /// Longest registered operator starting with `first`, or `first` alone
    fn scan_operator(&mut self, first: char) -> Result<String, ScanError> {
        let mut op = String::from(first);
        while self.config.is_operator_prefix(&op) {
            match self.source.get_char()? {
                Some(ch) => op.push(ch),
                None => break,
            }
        }
        while !self.config.is_operator(&op) {
            let last = op.char_indices().next_back();
            match last {
                Some((index, last)) if index > 0 => {
                    op.truncate(index);
                    self.source.save_char(last);
                }
                _ => break,
            }
        }
        Ok(op)
    }
}

impl Iterator for TokenScanner<'_> {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_empty() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}

impl fmt::Display for TokenScanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.source.buffer();
        let length = buffer.chars().count();
        if length < MAX_DISPLAY_LENGTH {
            write!(f, "TokenScanner(\"{buffer}\")")
        } else {
            write!(f, "TokenScanner({length} chars)")
        }
    }
}

impl fmt::Debug for TokenScanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenScanner")
            .field("config", &self.config)
            .field("position", &self.position())
            .field("saved_token", &self.saved_token)
            .finish_non_exhaustive()
    }
}
