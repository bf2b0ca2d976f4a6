use std::fmt::Display;
use std::io::{self, Write};

use crate::{DumpError, DumpReport, PLACEHOLDER};

const COLUMNS: &str = "Offset: Hex - Dec - Oct - Bin      - Char";

/*
 * DumpFormat
 * how a report is printed. This is a plain value handed to every output
 * call; variants are derived with the `with_*` methods.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpFormat {
    uppercase: bool,
    show_address: bool,
    placeholder: char,
    trailing_blank_line: bool,
}

impl Default for DumpFormat {
    fn default() -> Self {
        Self {
            uppercase: false,
            show_address: true,
            placeholder: PLACEHOLDER,
            trailing_blank_line: true,
        }
    }
}

impl DumpFormat {
    pub fn with_uppercase(self, uppercase: bool) -> Self {
        Self { uppercase, ..self }
    }

    pub fn with_address(self, show_address: bool) -> Self {
        Self {
            show_address,
            ..self
        }
    }

    pub fn with_placeholder(self, placeholder: char) -> Self {
        Self {
            placeholder,
            ..self
        }
    }

    pub fn with_trailing_blank_line(self, trailing_blank_line: bool) -> Self {
        Self {
            trailing_blank_line,
            ..self
        }
    }

    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    pub fn show_address(&self) -> bool {
        self.show_address
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn trailing_blank_line(&self) -> bool {
        self.trailing_blank_line
    }

    pub fn write_report<W: Write>(&self, report: &DumpReport, output: &mut W) -> io::Result<()> {
        output.write_all(self.render(report).as_bytes())
    }

    pub fn render(&self, report: &DumpReport) -> String {
        let mut content = format!(
            "{} - Size: {:>6} [{}]\n",
            report.title(),
            report.size(),
            self.hex(report.size(), 8)
        );

        if self.show_address {
            content.push_str(&format!("Dump address: {:#x}\n", report.address()));
        }

        content.push_str(COLUMNS);
        content.push('\n');

        for record in report.records() {
            content.push_str(&format!(
                "  {}: {}  - {} - {} - {:>8} - {}\n",
                self.hex(record.offset(), 4),
                self.hex(record.value() as usize, 2),
                record.dec(),
                record.oct(),
                record.bin(),
                record.display_char_or(self.placeholder)
            ));
        }

        if self.trailing_blank_line {
            content.push('\n');
        }

        content
    }

    /// One line: the title followed by the bytes as a hex string.
    pub fn render_compact(&self, report: &DumpReport) -> String {
        let bytes = report.bytes();
        let hex = if self.uppercase {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        };

        format!("{}: {}", report.title(), hex)
    }

    fn hex(&self, value: usize, width: usize) -> String {
        if self.uppercase {
            format!("{:0width$X}", value, width = width)
        } else {
            format!("{:0width$x}", value, width = width)
        }
    }
}

/// Join the displayed items of an ordered collection.
pub fn format_sequence<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// The low `width` bits of `value`, most significant first, zero extended.
pub fn format_bits(value: u128, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let masked = if width < 128 {
        value & ((1u128 << width) - 1)
    } else {
        value
    };

    format!("{:0width$b}", masked, width = width)
}

/// Read a bit string: the `len` digits (or all the remaining ones) from
/// character `pos` on, `zero` and `one` being the two digits. The first
/// digit read is the most significant bit.
pub fn parse_bits(
    text: &str,
    pos: usize,
    len: Option<usize>,
    zero: char,
    one: char,
) -> Result<u128, DumpError> {
    let count = text.chars().count();

    if pos > count {
        return Err(DumpError::BitString(text.to_owned(), pos));
    }

    let digits = text
        .chars()
        .enumerate()
        .skip(pos)
        .take(len.unwrap_or(count - pos));
    let mut value: u128 = 0;
    let mut width = 0;

    for (index, digit) in digits {
        let bit = match digit {
            d if d == zero => 0,
            d if d == one => 1,
            _ => return Err(DumpError::BitString(text.to_owned(), index)),
        };
        if width == u128::BITS {
            return Err(DumpError::BitString(text.to_owned(), index));
        }
        value = value << 1 | bit;
        width += 1;
    }

    Ok(value)
}
