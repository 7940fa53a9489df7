//! Quoted string literals
//!
//! The scanner keeps escape sequences in their raw form. Decoding is a separate
//! step driven by a fixed escape table.

use crate::error::{ConversionError, ScanError};
use crate::source::CharSource;
use std::iter::Peekable;
use std::str::CharIndices;

/// Returns true for characters that open a quoted literal
pub fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

/// Scans a quoted literal, including both delimiters, from `source`
pub(crate) fn scan_string(source: &mut CharSource<'_>) -> Result<String, ScanError> {
    let Some(delimiter) = source.get_char()? else {
        return Err(unterminated('"', source));
    };
    let mut token = String::from(delimiter);
    loop {
        match source.get_char()? {
            None => return Err(unterminated(delimiter, source)),
            Some(ch) if ch == delimiter => break,
            Some('\\') => scan_escape(source, &mut token)?,
            Some(ch) => token.push(ch),
        }
    }
    token.push(delimiter);
    Ok(token)
}

fn unterminated(delimiter: char, source: &CharSource<'_>) -> ScanError {
    ScanError::UnterminatedLiteral {
        delimiter,
        offset: source.offset(),
    }
}

/// Appends a raw escape sequence (backslash already consumed) to `token`
///
/// Digits, `x` and `u` start a run: the maximal run of digits (or hex digits)
/// after them is taken as well.
fn scan_escape(source: &mut CharSource<'_>, token: &mut String) -> Result<(), ScanError> {
    token.push('\\');
    let Some(ch) = source.get_char()? else {
        return Ok(());
    };
    token.push(ch);
    if !(ch.is_ascii_digit() || ch == 'x' || ch == 'u') {
        return Ok(());
    }

    let hex = !ch.is_ascii_digit();
    while let Some(next) = source.get_char()? {
        let continues = if hex {
            next.is_ascii_hexdigit()
        } else {
            next.is_ascii_digit()
        };
        if !continues {
            source.save_char(next);
            break;
        }
        token.push(next);
    }
    Ok(())
}

/// Decodes a quoted literal into the string it denotes
///
/// Recognized escapes are `\n`, `\t`, `\r`, `\b`, `\f`, `\v`, `\a`,
/// `\xHH`, `\uHHHH`, decimal byte escapes of one to three digits, and the
/// passthroughs `\\`, `\'` and `\"`. Anything else is an error.
pub fn decode_string_literal(token: &str) -> Result<String, ConversionError> {
    let delimiter = match token.chars().next() {
        Some(c) if is_quote(c) && token.len() >= 2 && token.ends_with(c) => c,
        _ => {
            return Err(ConversionError::NotAStringLiteral {
                token: token.to_string(),
            });
        }
    };

    let body = &token[1..token.len() - 1];
    let mut result = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => result.push(decode_escape(&mut chars, index + 1)?),
            c if c == delimiter => {
                return Err(ConversionError::UnescapedDelimiter {
                    delimiter,
                    index: index + 1,
                });
            }
            c => result.push(c),
        }
    }

    Ok(result)
}

/// Decodes one escape; `index` is the token index of the backslash
fn decode_escape(
    chars: &mut Peekable<CharIndices<'_>>,
    index: usize,
) -> Result<char, ConversionError> {
    let invalid = |sequence: String| ConversionError::InvalidEscape { sequence, index };

    let Some((_, ch)) = chars.next() else {
        return Err(invalid(String::new()));
    };
    let decoded = match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'v' => '\u{000B}',
        'a' => '\u{0007}',
        '\\' | '\'' | '"' => ch,
        'x' | 'u' => {
            let width = if ch == 'x' { 2 } else { 4 };
            let mut digits = String::new();
            while digits.len() < width {
                match chars.next_if(|(_, c)| c.is_ascii_hexdigit()) {
                    Some((_, c)) => digits.push(c),
                    None => break,
                }
            }
            let sequence = format!("{ch}{digits}");
            if digits.len() < width {
                return Err(invalid(sequence));
            }
            u32::from_str_radix(&digits, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| invalid(sequence))?
        }
        c if c.is_ascii_digit() => {
            let mut digits = String::from(c);
            while digits.len() < 3 {
                match chars.next_if(|(_, c)| c.is_ascii_digit()) {
                    Some((_, c)) => digits.push(c),
                    None => break,
                }
            }
            match digits.parse::<u8>() {
                Ok(byte) => char::from(byte),
                Err(_) => return Err(invalid(digits)),
            }
        }
        other => return Err(invalid(other.to_string())),
    };
    Ok(decoded)
}
