//! Number literal recognition and conversion
//!
//! Number literals are recognized by a small state machine covering decimal
//! integers, decimal fractions, exponents and `0x` hexadecimal literals. The
//! scanner returns the raw literal text; [`parse_number`] converts it.

use crate::error::{ConversionError, ScanError};
use crate::source::CharSource;

/// States of the number literal recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberState {
    /// Nothing consumed yet
    Initial,
    /// Literal started with `0`
    LeadingZero,
    /// Integer digits
    BeforeDecimal,
    /// Digits after the decimal point
    AfterDecimal,
    /// Exponent marker `e`/`E` consumed
    StartingExponent,
    /// Exponent sign consumed
    FoundExponentSign,
    /// Exponent digits
    ScanningExponent,
    /// Hex digits after `0x`
    ScanningHex,
    /// Literal complete; the character that led here is not part of it
    Final,
}

impl NumberState {
    /// Returns the state reached by consuming `ch` (`None` is end of input)
    pub fn transition(self, ch: Option<char>) -> NumberState {
        use NumberState::*;

        let Some(ch) = ch else {
            return Final;
        };
        match self {
            Initial => match ch {
                '0' => LeadingZero,
                c if c.is_ascii_digit() => BeforeDecimal,
                _ => Final,
            },
            LeadingZero => match ch {
                'x' | 'X' => ScanningHex,
                '.' => AfterDecimal,
                'e' | 'E' => StartingExponent,
                c if c.is_ascii_digit() => LeadingZero,
                _ => Final,
            },
            BeforeDecimal => match ch {
                '.' => AfterDecimal,
                'e' | 'E' => StartingExponent,
                c if c.is_ascii_digit() => BeforeDecimal,
                _ => Final,
            },
            AfterDecimal => match ch {
                'e' | 'E' => StartingExponent,
                c if c.is_ascii_digit() => AfterDecimal,
                _ => Final,
            },
            StartingExponent => match ch {
                '+' | '-' => FoundExponentSign,
                c if c.is_ascii_digit() => ScanningExponent,
                _ => Final,
            },
            FoundExponentSign | ScanningExponent => match ch {
                c if c.is_ascii_digit() => ScanningExponent,
                _ => Final,
            },
            ScanningHex => match ch {
                c if c.is_ascii_hexdigit() => ScanningHex,
                _ => Final,
            },
            Final => Final,
        }
    }

    /// True for states where an exponent was started but has no digits yet
    fn is_incomplete_exponent(self) -> bool {
        matches!(
            self,
            NumberState::StartingExponent | NumberState::FoundExponentSign
        )
    }
}

/// Scans a number literal from `source`
///
/// The character that ends the literal is pushed back. An exponent marker
/// without digits (`1e`, `1e+`) is not part of the literal: the marker and any
/// sign are pushed back as well so they are scanned again as ordinary tokens.
pub(crate) fn scan_number(source: &mut CharSource<'_>) -> Result<String, ScanError> {
    let mut token = String::new();
    let mut state = NumberState::Initial;
    let mut exponent_start = 0;

    loop {
        let ch = source.get_char()?;
        let next = state.transition(ch);
        if next == NumberState::Final {
            if let Some(ch) = ch {
                source.save_char(ch);
            }
            if state.is_incomplete_exponent() {
                while token.len() > exponent_start {
                    if let Some(pending) = token.pop() {
                        source.save_char(pending);
                    }
                }
            }
            return Ok(token);
        }
        if next == NumberState::StartingExponent {
            exponent_start = token.len();
        }
        if let Some(ch) = ch {
            token.push(ch);
        }
        state = next;
    }
}

/// Converts number literal text into its value
///
/// Accepts decimal literals with optional fraction and exponent, and
/// hexadecimal literals with a `0x` or `0X` prefix.
pub fn parse_number(token: &str) -> Result<f64, ConversionError> {
    let invalid = || ConversionError::InvalidNumber {
        token: token.to_string(),
    };

    if let Some(digits) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u64::from_str_radix(digits, 16).map_err(|_| {
            ConversionError::NumberOutOfRange {
                token: token.to_string(),
            }
        })?;
        return Ok(value as f64);
    }

    let well_formed = token.chars().next().is_some_and(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !well_formed {
        return Err(invalid());
    }
    token.parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Input;

    fn scan(input: &str) -> (String, String) {
        let mut source = CharSource::new(Input::from(input));
        let token = scan_number(&mut source).unwrap();
        let mut rest = String::new();
        while let Some(ch) = source.get_char().unwrap() {
            rest.push(ch);
        }
        (token, rest)
    }

    #[test]
    fn test_transitions() {
        use NumberState::*;
        assert_eq!(Initial.transition(Some('0')), LeadingZero);
        assert_eq!(Initial.transition(Some('5')), BeforeDecimal);
        assert_eq!(LeadingZero.transition(Some('X')), ScanningHex);
        assert_eq!(LeadingZero.transition(Some('.')), AfterDecimal);
        assert_eq!(BeforeDecimal.transition(Some('e')), StartingExponent);
        assert_eq!(AfterDecimal.transition(Some('.')), Final);
        assert_eq!(StartingExponent.transition(Some('-')), FoundExponentSign);
        assert_eq!(StartingExponent.transition(Some('3')), ScanningExponent);
        assert_eq!(FoundExponentSign.transition(Some('+')), Final);
        assert_eq!(ScanningExponent.transition(Some('e')), Final);
        assert_eq!(ScanningHex.transition(Some('f')), ScanningHex);
        assert_eq!(ScanningHex.transition(Some('g')), Final);
        assert_eq!(BeforeDecimal.transition(None), Final);
    }

    #[test]
    fn test_scan_integers_and_decimals() {
        assert_eq!(scan("42 rest"), ("42".into(), " rest".into()));
        assert_eq!(scan("3.14e-2;"), ("3.14e-2".into(), ";".into()));
        assert_eq!(scan("1.5.2"), ("1.5".into(), ".2".into()));
        assert_eq!(scan("007"), ("007".into(), "".into()));
        assert_eq!(scan("0.5E+10x"), ("0.5E+10".into(), "x".into()));
    }

    #[test]
    fn test_scan_hex() {
        assert_eq!(scan("0x1F"), ("0x1F".into(), "".into()));
        assert_eq!(scan("0xFFg"), ("0xFF".into(), "g".into()));
        assert_eq!(scan("0x"), ("0x".into(), "".into()));
    }

    #[test]
    fn test_incomplete_exponent_is_pushed_back() {
        assert_eq!(scan("1e"), ("1".into(), "e".into()));
        assert_eq!(scan("1ex"), ("1".into(), "ex".into()));
        assert_eq!(scan("2.5E+"), ("2.5".into(), "E+".into()));
        assert_eq!(scan("7e-z"), ("7".into(), "e-z".into()));
        assert_eq!(scan("0e"), ("0".into(), "e".into()));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42").unwrap(), 42.0);
        assert_eq!(parse_number("3.14e-2").unwrap(), 0.0314);
        assert_eq!(parse_number("1.").unwrap(), 1.0);
        assert_eq!(parse_number("0x1F").unwrap(), 31.0);
        assert_eq!(parse_number("0XfF").unwrap(), 255.0);
        assert_eq!(parse_number("007").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_number_rejects_malformed_text() {
        for text in ["", "abc", "inf", "NaN", "0x", "0xZZ", "1e", "1.2.3", "-1", " 1"] {
            assert!(
                matches!(parse_number(text), Err(ConversionError::InvalidNumber { .. })),
                "expected failure for {text:?}"
            );
        }
        assert!(matches!(
            parse_number("0x1FFFFFFFFFFFFFFFF"),
            Err(ConversionError::NumberOutOfRange { .. })
        ));
    }
}
