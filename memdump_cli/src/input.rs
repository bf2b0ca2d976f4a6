use std::fmt;

use anyhow::{anyhow, Context};
use clap::ValueEnum;
use memdump_lib::DumpReport;

use crate::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    F32,
    F64,
    Bool,
    Char,
    /// the text bytes
    Str,
    /// the string descriptor (pointer, length, capacity)
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Str => "str",
            Self::String => "String",
        };

        write!(f, "{}", name)
    }
}

fn split_radix(literal: &str) -> (String, u32) {
    let digits = |rest: &str| rest.replace('_', "");

    if let Some(rest) = literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
        (digits(rest), 16)
    } else if let Some(rest) = literal.strip_prefix("0o") {
        (digits(rest), 8)
    } else if let Some(rest) = literal.strip_prefix("0b") {
        (digits(rest), 2)
    } else {
        (digits(literal), 10)
    }
}

/// Parse an unsigned integer, `0x`, `0o` and `0b` prefixes select the radix.
pub fn parse_unsigned(literal: &str) -> AppResult<u128> {
    let (digits, radix) = split_radix(literal);

    u128::from_str_radix(&digits, radix)
        .with_context(|| format!("'{}' is not an unsigned integer", literal))
}

/// Same as `parse_unsigned` with an optional leading minus sign.
pub fn parse_signed(literal: &str) -> AppResult<i128> {
    let (negative, magnitude) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    let (digits, radix) = split_radix(magnitude);
    let digits = if negative {
        format!("-{digits}")
    } else {
        digits
    };

    i128::from_str_radix(&digits, radix)
        .with_context(|| format!("'{}' is not a signed integer", literal))
}

macro_rules! narrow {
    ($kind:ty, $wide:expr, $literal:expr) => {
        <$kind>::try_from($wide).map_err(|_| {
            anyhow!("'{}' does not fit in {}", $literal, stringify!($kind))
        })?
    };
}

fn single_char(literal: &str) -> AppResult<char> {
    let mut chars = literal.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(anyhow!("'{}' is not a single character", literal)),
    }
}

/// Parse `literal` as a `kind` value and dump it.
pub fn value_report(kind: ValueKind, literal: &str, title: &str) -> AppResult<DumpReport> {
    let report = match kind {
        ValueKind::U8 => DumpReport::new(&narrow!(u8, parse_unsigned(literal)?, literal), title),
        ValueKind::U16 => DumpReport::new(&narrow!(u16, parse_unsigned(literal)?, literal), title),
        ValueKind::U32 => DumpReport::new(&narrow!(u32, parse_unsigned(literal)?, literal), title),
        ValueKind::U64 => DumpReport::new(&narrow!(u64, parse_unsigned(literal)?, literal), title),
        ValueKind::U128 => DumpReport::new(&parse_unsigned(literal)?, title),
        ValueKind::I8 => DumpReport::new(&narrow!(i8, parse_signed(literal)?, literal), title),
        ValueKind::I16 => DumpReport::new(&narrow!(i16, parse_signed(literal)?, literal), title),
        ValueKind::I32 => DumpReport::new(&narrow!(i32, parse_signed(literal)?, literal), title),
        ValueKind::I64 => DumpReport::new(&narrow!(i64, parse_signed(literal)?, literal), title),
        ValueKind::I128 => DumpReport::new(&parse_signed(literal)?, title),
        ValueKind::F32 => DumpReport::new(
            &literal
                .parse::<f32>()
                .with_context(|| format!("'{}' is not a float", literal))?,
            title,
        ),
        ValueKind::F64 => DumpReport::new(
            &literal
                .parse::<f64>()
                .with_context(|| format!("'{}' is not a float", literal))?,
            title,
        ),
        ValueKind::Bool => DumpReport::new(
            &literal
                .parse::<bool>()
                .with_context(|| format!("'{}' is not a boolean", literal))?,
            title,
        ),
        ValueKind::Char => DumpReport::new(&single_char(literal)?, title),
        ValueKind::Str => DumpReport::new(literal, title),
        ValueKind::String => DumpReport::new(&literal.to_owned(), title),
    };

    Ok(report?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unsigned() {
        assert_eq!(42, parse_unsigned("42").unwrap());
        assert_eq!(0x01020304, parse_unsigned("0x0102_0304").unwrap());
        assert_eq!(0o17, parse_unsigned("0o17").unwrap());
        assert_eq!(0b101, parse_unsigned("0b101").unwrap());
        assert!(parse_unsigned("-1").is_err());
        assert!(parse_unsigned("0xzz").is_err());
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(-1, parse_signed("-1").unwrap());
        assert_eq!(-16, parse_signed("-0x10").unwrap());
        assert_eq!(127, parse_signed("127").unwrap());
        assert!(parse_signed("--1").is_err());
    }

    #[test]
    fn test_value_report() {
        let report = value_report(ValueKind::U32, "0x01020304", "word").unwrap();
        assert_eq!(0x01020304u32.to_ne_bytes().to_vec(), report.bytes());

        let report = value_report(ValueKind::I8, "-1", "minus one").unwrap();
        assert_eq!(vec![0xff], report.bytes());

        let report = value_report(ValueKind::Char, "A", "letter").unwrap();
        assert_eq!(0x41u32.to_ne_bytes().to_vec(), report.bytes());

        let report = value_report(ValueKind::Str, "Hi!", "text").unwrap();
        assert_eq!(b"Hi!".to_vec(), report.bytes());

        let report = value_report(ValueKind::String, "Hi!", "string").unwrap();
        assert_eq!(std::mem::size_of::<String>(), report.size());
    }

    #[test]
    fn test_value_report_errors() {
        let error = value_report(ValueKind::U8, "256", "byte").unwrap_err();
        assert_eq!("'256' does not fit in u8", error.to_string());

        assert!(value_report(ValueKind::Char, "AB", "chars").is_err());
        assert!(value_report(ValueKind::Bool, "yes", "flag").is_err());

        let error = value_report(ValueKind::Str, "", "nothing").unwrap_err();
        assert!(error.to_string().contains("'nothing'"));
    }
}
