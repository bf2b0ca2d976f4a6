/// Glyph shown in place of a byte that is not printable ASCII.
pub const PLACEHOLDER: char = '.';

/// Printable ASCII, space through tilde.
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/*
 * ByteRecord
 * one byte of a value's raw representation and where it sits
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRecord {
    offset: usize,
    value: u8,
}

impl ByteRecord {
    pub fn new(offset: usize, value: u8) -> Self {
        Self { offset, value }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn hex(&self) -> String {
        format!("{:02x}", self.value)
    }

    pub fn upper_hex(&self) -> String {
        format!("{:02X}", self.value)
    }

    pub fn dec(&self) -> String {
        format!("{:>3}", self.value)
    }

    pub fn oct(&self) -> String {
        format!("{:03o}", self.value)
    }

    pub fn bin(&self) -> String {
        format!("{:08b}", self.value)
    }

    pub fn display_char(&self) -> char {
        self.display_char_or(PLACEHOLDER)
    }

    pub fn display_char_or(&self, placeholder: char) -> char {
        if is_printable(self.value) {
            self.value as char
        } else {
            placeholder
        }
    }
}
