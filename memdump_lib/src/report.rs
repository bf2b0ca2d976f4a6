use std::io::Write;

use log::debug;

use crate::{ByteRecord, DumpError, DumpFormat, RawBytes};

/*
 * DumpReport
 * the byte layout of one value, built fresh for every dump
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpReport {
    title: String,
    address: usize,
    records: Vec<ByteRecord>,
}

impl DumpReport {
    /// Read the raw representation of `value`. A value without bytes, or whose
    /// adapter does not produce as many bytes as it declares, is rejected.
    pub fn new<T>(value: &T, title: &str) -> Result<Self, DumpError>
    where
        T: RawBytes + ?Sized,
    {
        let width = value.byte_width();

        if width == 0 {
            return Err(DumpError::ZeroWidth(title.to_owned()));
        }

        let bytes = value.raw_bytes();

        if bytes.len() != width {
            return Err(DumpError::WidthMismatch(
                title.to_owned(),
                width,
                bytes.len(),
            ));
        }

        let address = value as *const T as *const () as usize;
        debug!("dumped '{}': {} bytes at 0x{:x}", title, width, address);

        Ok(Self {
            title: title.to_owned(),
            address,
            records: bytes
                .into_iter()
                .enumerate()
                .map(|(offset, value)| ByteRecord::new(offset, value))
                .collect(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Location of the inspected value, only meaningful within this process.
    pub fn address(&self) -> usize {
        self.address
    }

    pub fn records(&self) -> &[ByteRecord] {
        &self.records
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.records.iter().map(ByteRecord::value).collect()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes())
    }

    /// Equality on everything but the address.
    pub fn same_layout(&self, other: &DumpReport) -> bool {
        self.title == other.title && self.records == other.records
    }
}

/// Build the report of `value` and write it to `output`.
pub fn dump<T, W>(value: &T, title: &str, format: &DumpFormat, output: &mut W) -> Result<(), DumpError>
where
    T: RawBytes + ?Sized,
    W: Write,
{
    let report = DumpReport::new(value, title)?;
    format.write_report(&report, output)?;

    Ok(())
}
