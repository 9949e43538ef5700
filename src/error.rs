//! Parse-outcome error codes
//!
//! Mirrors the closed error taxonomy of a recursive-descent JSON parser:
//! every non-`Ok` outcome is one of the variants below, and a failing parse
//! always leaves the caller with no partial tree (see [`crate::parser::parse`]).

use core::fmt;

/// Why a [`crate::parser::parse`] call failed.
///
/// There is no `Ok` variant here on purpose — success is `Result::Ok(Value)`,
/// not a member of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// The first non-whitespace byte does not start any valid JSON token.
    InvalidValue,
    /// Trailing non-whitespace bytes followed a complete value.
    RootNotSingular,
    /// A syntactically valid number literal is out of `f64` range (over/underflow to `inf`).
    NumberTooBig,
    /// A string literal was never closed with `"`.
    MissQuotationMark,
    /// A `\` escape was followed by a byte that isn't a recognized escape.
    InvalidStringEscape,
    /// An unescaped control byte (`< 0x20`) appeared inside a string literal.
    InvalidStringChar,
    /// A `\u` escape was not followed by exactly four hex digits.
    InvalidUnicodeHex,
    /// A high surrogate was not followed by a matching low surrogate, or a
    /// low surrogate appeared without a preceding high surrogate.
    InvalidUnicodeSurrogate,
    /// An array was missing a `,` between elements or a closing `]`.
    MissCommaOrSquareBracket,
    /// An object member is missing its `"key"`.
    MissKey,
    /// An object member's key was not followed by `:`.
    MissColon,
    /// An object was missing a `,` between members or a closing `}`.
    MissCommaOrCurlyBracket,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::NumberTooBig => "number out of range",
            ParseError::MissQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "unescaped control character in string",
            ParseError::InvalidUnicodeHex => "invalid \\u hex digits",
            ParseError::InvalidUnicodeSurrogate => "invalid UTF-16 surrogate pair",
            ParseError::MissCommaOrSquareBracket => "missing ',' or ']' in array",
            ParseError::MissKey => "missing object key",
            ParseError::MissColon => "missing ':' after object key",
            ParseError::MissCommaOrCurlyBracket => "missing ',' or '}' in object",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
