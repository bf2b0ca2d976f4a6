use crate::RawBytes;

pub const B_BITS: u32 = 3;
pub const C_BITS: u32 = 12;
pub const D_BITS: u32 = 4;
pub const BITFIELD_SIZE: usize = 12;

const C_SHIFT: u32 = B_BITS + 1;
const D_BYTE: usize = 9;

fn mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

/*
 * BitfieldRecord
 * three packed fields with filler in between, 12 bytes:
 *
 *   bytes 0..4   little endian word: b in bits 0-2, filler bit 3,
 *                c in bits 4-15, filler bits 16-31
 *   bytes 4..8   filler up to the next 8 byte unit
 *   byte  8      filler byte
 *   byte  9      d in bits 0-3, filler bits 4-7
 *   bytes 10..12 tail filler
 *
 * Filler is zero when packing and never read when unpacking.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitfieldRecord {
    raw: [u8; BITFIELD_SIZE],
}

impl BitfieldRecord {
    /// Pack the fields, extra high bits of each are dropped.
    pub fn new(b: u32, c: u32, d: u32) -> Self {
        let mut raw = [0x00; BITFIELD_SIZE];
        let word = (b & mask(B_BITS)) | ((c & mask(C_BITS)) << C_SHIFT);
        raw[0..4].copy_from_slice(&word.to_le_bytes());
        raw[D_BYTE] = (d & mask(D_BITS)) as u8;

        Self { raw }
    }

    pub fn from_raw(raw: [u8; BITFIELD_SIZE]) -> Self {
        Self { raw }
    }

    pub fn as_raw(&self) -> &[u8; BITFIELD_SIZE] {
        &self.raw
    }

    pub fn b(&self) -> u32 {
        self.first_word() & mask(B_BITS)
    }

    pub fn c(&self) -> u32 {
        (self.first_word() >> C_SHIFT) & mask(C_BITS)
    }

    pub fn d(&self) -> u32 {
        u32::from(self.raw[D_BYTE]) & mask(D_BITS)
    }

    fn first_word(&self) -> u32 {
        u32::from_le_bytes([self.raw[0], self.raw[1], self.raw[2], self.raw[3]])
    }
}

impl RawBytes for BitfieldRecord {
    fn byte_width(&self) -> usize {
        BITFIELD_SIZE
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.raw);
    }
}
