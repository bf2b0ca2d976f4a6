use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DumpError {
    ZeroWidth(String),                   // title
    WidthMismatch(String, usize, usize), // title, declared width, bytes produced
    BitString(String, usize),            // text, position of the faulty digit
    Io(io::Error),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DumpError::ZeroWidth(title) => {
                write!(f, "Could not DUMP '{}': the value is 0 bytes wide.", title)
            }
            DumpError::WidthMismatch(title, declared, produced) => write!(
                f,
                "Could not DUMP '{}': {} bytes declared but {} bytes produced.",
                title, declared, produced
            ),
            DumpError::BitString(text, position) => write!(
                f,
                "Could not READ bit string '{}': unexpected digit at position {}.",
                text, position
            ),
            DumpError::Io(err) => write!(f, "Could not WRITE dump: {}", err),
        }
    }
}

impl error::Error for DumpError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            DumpError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DumpError {
    fn from(err: io::Error) -> Self {
        DumpError::Io(err)
    }
}
