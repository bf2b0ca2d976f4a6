use std::array;
use std::mem;

use memdump_lib::{format_bits, format_sequence, parse_bits, BitfieldRecord, DumpReport, RawBytes};

use crate::{AppResult, OutputToken};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    LoVal = 0x00,
    One = 1,
    Two,
    Three,
    Tab = 0x09,
    NewLine,
    Eleven,
    FormFeed,
    CarriageReturn,
    Space = 0x20,
    OneHundred = 100,
    HiVal = 0xff,
}

impl Code {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoVal => "LoVal",
            Self::One => "One",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Tab => "Tab",
            Self::NewLine => "NewLine",
            Self::Eleven => "Eleven",
            Self::FormFeed => "FormFeed",
            Self::CarriageReturn => "CarriageReturn",
            Self::Space => "Space",
            Self::OneHundred => "OneHundred",
            Self::HiVal => "HiVal",
        }
    }

    pub fn value(self) -> u32 {
        self as u32
    }
}

impl RawBytes for Code {
    fn byte_width(&self) -> usize {
        mem::size_of::<Code>()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value().to_ne_bytes());
    }
}

/// A 64 bits word readable as halves, quarters or bytes, in memory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordView(u64);

impl WordView {
    pub fn new(word: u64) -> Self {
        Self(word)
    }

    pub fn word(&self) -> u64 {
        self.0
    }

    pub fn halves(&self) -> [u32; 2] {
        let bytes = self.bytes();

        array::from_fn(|i| {
            u32::from_ne_bytes([bytes[4 * i], bytes[4 * i + 1], bytes[4 * i + 2], bytes[4 * i + 3]])
        })
    }

    pub fn quarters(&self) -> [u16; 4] {
        let bytes = self.bytes();

        array::from_fn(|i| u16::from_ne_bytes([bytes[2 * i], bytes[2 * i + 1]]))
    }

    pub fn bytes(&self) -> [u8; 8] {
        self.0.to_ne_bytes()
    }
}

impl RawBytes for WordView {
    fn byte_width(&self) -> usize {
        mem::size_of::<u64>()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        self.0.write_raw(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue {
    big: u64,
    name: String,
}

impl NamedValue {
    pub fn new(name: &str, big: u64) -> Self {
        Self {
            big,
            name: name.to_owned(),
        }
    }

    pub fn big(&self) -> u64 {
        self.big
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl RawBytes for NamedValue {
    fn byte_width(&self) -> usize {
        self.big.byte_width() + self.name.byte_width()
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        self.big.write_raw(out);
        self.name.write_raw(out);
    }
}

fn marker(description: &str) -> OutputToken {
    OutputToken::Marker {
        description: description.to_owned(),
    }
}

fn report<T: RawBytes + ?Sized>(value: &T, title: &str) -> AppResult<OutputToken> {
    Ok(OutputToken::Report(DumpReport::new(value, title)?))
}

fn bitfield_sample(tokens: &mut Vec<OutputToken>) -> AppResult<()> {
    let record = BitfieldRecord::new(0b101, 0b1110_1110_1110, 0b1011);

    tokens.push(marker("bitfield record"));
    tokens.push(OutputToken::Note(format!(
        "{:>6} {:02x} {:>8} : {:04x} {:>16} : {:04x} {:>8}",
        record.b(),
        record.b(),
        format_bits(record.b().into(), 3),
        record.c(),
        format_bits(record.c().into(), 12),
        record.d(),
        format_bits(record.d().into(), 4),
    )));
    tokens.push(report(&record, "Bitfield record")?);

    Ok(())
}

fn named_value_sample(tokens: &mut Vec<OutputToken>) -> AppResult<()> {
    let named = NamedValue::new("junk", u64::MAX);

    tokens.push(marker("named value"));
    tokens.push(OutputToken::Note(format!(
        "{} {} {:x}",
        named.name(),
        named.big(),
        named.big()
    )));
    tokens.push(report(&named, "NamedValue")?);

    Ok(())
}

fn enumeration_sample(tokens: &mut Vec<OutputToken>) -> AppResult<()> {
    let codes = [
        Code::OneHundred,
        Code::LoVal,
        Code::HiVal,
        Code::Space,
        Code::Tab,
        Code::NewLine,
        Code::CarriageReturn,
        Code::FormFeed,
    ];

    tokens.push(marker("enumerations"));
    for code in codes {
        let name = code.name().to_owned();
        tokens.push(OutputToken::Note(format!(
            "{}: {:>4} [{:0width$x}]",
            name,
            code.value(),
            code.value(),
            width = 2 * mem::size_of::<Code>()
        )));
        tokens.push(report(&code, "Enumeration 'code'")?);
        tokens.push(report(&name, "String 'name'")?);
        tokens.push(report(&(code, &name), "(Code, &String) 'pair'")?);
    }

    let letters: Vec<(char, String)> = [('U', "Uu"), ('m', "Ml"), ('a', "Al"), ('Z', "Zu")]
        .into_iter()
        .map(|(letter, text)| (letter, text.to_owned()))
        .collect();

    for pair in &letters {
        let (letter, text) = pair;
        tokens.push(OutputToken::Note(format!("letter: {} {}", letter, text)));
        tokens.push(report(letter, "char 'letter'")?);
        tokens.push(report(text, "String 'text'")?);
        tokens.push(report(pair, "(char, String) 'pair'")?);
    }
    tokens.push(report(&letters, "Vec<(char, String)>")?);
    tokens.push(report(letters.as_slice(), "[(char, String)]")?);

    Ok(())
}

fn word_view_sample(tokens: &mut Vec<OutputToken>) -> AppResult<()> {
    let view = WordView::new(0xf010_0020_8040_0080);

    tokens.push(marker("word views"));
    tokens.push(OutputToken::Note("u64:".to_string()));
    tokens.push(OutputToken::Note(format!("{:>22} {:016x}", view.word(), view.word())));
    tokens.push(OutputToken::Note("u32:".to_string()));
    for half in view.halves() {
        tokens.push(OutputToken::Note(format!("{:>22} {}{:08x}", half, " ".repeat(8), half)));
    }
    tokens.push(OutputToken::Note("u16:".to_string()));
    for quarter in view.quarters() {
        tokens.push(OutputToken::Note(format!("{:>22} {}{:04x}", quarter, " ".repeat(12), quarter)));
    }
    tokens.push(OutputToken::Note("u8:".to_string()));
    for byte in view.bytes() {
        tokens.push(OutputToken::Note(format!("{:>22} {}{:02x}", byte, " ".repeat(14), byte)));
    }
    tokens.push(report(&view, "WordView")?);

    Ok(())
}

fn bit_strings_sample(tokens: &mut Vec<OutputToken>) -> AppResult<()> {
    tokens.push(marker("bit strings"));
    let samples = [
        (0, 8),
        (42, 8),
        (u64::MAX as u128, 70),
        (0xfff0, 8),
        (parse_bits("110010", 0, None, '0', '1')?, 8),
        (parse_bits("110010", 2, None, '0', '1')?, 8),
        (parse_bits("110010", 2, Some(3), '0', '1')?, 8),
        (parse_bits("aBaaBBaB", 0, None, 'a', 'B')?, 8),
        (parse_bits("XXXXYYYY", 0, Some(8), 'X', 'Y')?, 8),
    ];
    for (value, width) in samples {
        tokens.push(OutputToken::Note(format_bits(value, width)));
    }

    Ok(())
}

/// Everything the `demo` command prints, in order.
pub fn demo_tokens() -> AppResult<Vec<OutputToken>> {
    let mut tokens = vec![OutputToken::Note(format_sequence(
        ["Hello", "from", "memdump", env!("CARGO_PKG_VERSION")],
        " ",
    ))];

    bitfield_sample(&mut tokens)?;
    named_value_sample(&mut tokens)?;
    enumeration_sample(&mut tokens)?;
    word_view_sample(&mut tokens)?;
    bit_strings_sample(&mut tokens)?;

    Ok(tokens)
}
