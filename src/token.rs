//! Token classification

use std::fmt;

/// Token classes reported by [`crate::TokenScanner::token_type`]
///
/// Classification looks only at the first character of a token, so a token
/// can be reported as a class whose scanning rule did not produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// The empty token marking end of input
    Eof,
    /// Whitespace
    Separator,
    /// Alphanumerics and extra word characters
    Word,
    /// Starts with a digit
    Number,
    /// Starts with a quote
    String,
    /// Anything else
    Operator,
}

impl TokenType {
    /// Returns the upper-case name of the class
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Eof => "EOF",
            TokenType::Separator => "SEPARATOR",
            TokenType::Word => "WORD",
            TokenType::Number => "NUMBER",
            TokenType::String => "STRING",
            TokenType::Operator => "OPERATOR",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_names() {
        assert_eq!(TokenType::Eof.as_str(), "EOF");
        assert_eq!(TokenType::Separator.to_string(), "SEPARATOR");
        assert_eq!(format!("{}", TokenType::Operator), "OPERATOR");
    }
}
