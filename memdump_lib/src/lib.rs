mod bitfield;
mod error;
mod format;
mod raw_bytes;
mod record;
mod report;

pub use bitfield::{BitfieldRecord, BITFIELD_SIZE, B_BITS, C_BITS, D_BITS};
pub use error::DumpError;
pub use format::{format_bits, format_sequence, parse_bits, DumpFormat};
pub use raw_bytes::RawBytes;
pub use record::{is_printable, ByteRecord, PLACEHOLDER};
pub use report::{dump, DumpReport};
