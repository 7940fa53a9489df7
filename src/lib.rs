//! # Token Scanner
//!
//! A configurable lexical scanner that splits text into flat string tokens:
//! words, numbers, quoted strings and operators.
//!
//! ## Overview
//!
//! The scanner reads from an in-memory string or from any line-readable
//! stream. Out of the box it only separates words from single-character
//! operators; everything else is opt-in:
//!
//! - **Whitespace skipping**: drop separators between tokens
//! - **Comment skipping**: drop `// ...` and `/* ... */`
//! - **Number literals**: integers, decimals, exponents and `0x` hex
//! - **Quoted strings**: `'...'` and `"..."` with raw escape sequences
//! - **Operators**: greedy longest match over a registered set
//! - **Lookahead**: one token of pushback via `save_token`/`has_more_tokens`
//!
//! ## Basic Usage
//!
//! ```rust
//! use token_scanner::{TokenScanner, TokenType};
//!
//! let mut scanner = TokenScanner::new("if (x >= 0x1F) say 'hi\\x21'");
//! scanner.ignore_whitespace();
//! scanner.scan_numbers();
//! scanner.scan_strings();
//! scanner.add_operator(">=");
//!
//! let mut tokens = Vec::new();
//! while scanner.has_more_tokens()? {
//!     tokens.push(scanner.next_token()?);
//! }
//! assert_eq!(tokens, ["if", "(", "x", ">=", "0x1F", ")", "say", "'hi\\x21'"]);
//!
//! assert_eq!(scanner.token_type("0x1F"), TokenType::Number);
//! assert_eq!(scanner.number_value("0x1F")?, 31.0);
//! assert_eq!(scanner.string_value("'hi\\x21'")?, "hi!");
//! # Ok::<(), token_scanner::ScanError>(())
//! ```
//!
//! ## Streams
//!
//! ```rust
//! use std::io::Cursor;
//! use token_scanner::{Input, TokenScanner};
//!
//! let mut scanner = TokenScanner::new(Input::reader(Cursor::new("take lamp\nnorth\n")));
//! scanner.ignore_whitespace();
//!
//! let tokens: Vec<String> = scanner.by_ref().collect::<Result<_, _>>()?;
//! assert_eq!(tokens, ["take", "lamp", "north"]);
//! # Ok::<(), token_scanner::ScanError>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use token_scanner::{ScanError, TokenScanner};
//!
//! let mut scanner = TokenScanner::new("'unterminated");
//! scanner.scan_strings();
//!
//! match scanner.next_token() {
//!     Err(ScanError::UnterminatedLiteral { delimiter, offset }) => {
//!         assert_eq!(delimiter, '\'');
//!         assert_eq!(offset, 13);
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod literal;
pub mod number;
pub mod scanner;
pub mod source;
pub mod token;

#[cfg(test)]
mod error_tests;

// Re-export main types
pub use config::ScannerConfig;
pub use error::{ConversionError, ScanError};
pub use literal::decode_string_literal;
pub use number::{NumberState, parse_number};
pub use scanner::TokenScanner;
pub use source::Input;
pub use token::TokenType;
