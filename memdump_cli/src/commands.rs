use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::{Path, PathBuf},
    sync::mpsc::Sender,
};

use anyhow::{anyhow, Context};
use clap::Subcommand;
use log::info;
use memdump_lib::DumpReport;

use crate::{demo_tokens, value_report, AppResult, OutputToken, ValueKind};

#[derive(Debug, Subcommand)]
pub enum DumpCommand {
    /// Dump values parsed from literals
    Value {
        /// Type of the values
        #[arg(value_enum)]
        kind: ValueKind,

        /// Literals, integers accept 0x, 0o and 0b prefixes
        #[arg(required = true)]
        literals: Vec<String>,

        /// Title of the dumps (defaults to the type and literal)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Dump hex encoded byte strings
    Bytes {
        #[arg(required = true)]
        strings: Vec<String>,

        #[arg(short, long)]
        title: Option<String>,
    },

    /// Dump the content of files
    File {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// First byte to dump
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Number of bytes to dump (up to the end of file when omitted)
        #[arg(long)]
        length: Option<usize>,
    },

    /// Dump the sample records, enumerations and views
    Demo,
}

impl DumpCommand {
    /// Send the output of the command to the displayer. Every dump is built
    /// before being sent, a failing one stops the command.
    pub fn run(&self, sender: &Sender<OutputToken>) -> AppResult<()> {
        match self {
            Self::Value {
                kind,
                literals,
                title,
            } => {
                info!("dumping {} {} value(s)", literals.len(), kind);
                for literal in literals {
                    let title = title
                        .clone()
                        .unwrap_or_else(|| format!("{} {}", kind, literal));
                    send(sender, OutputToken::Report(value_report(*kind, literal, &title)?))?;
                }
            }
            Self::Bytes { strings, title } => {
                info!("dumping {} byte string(s)", strings.len());
                for encoded in strings {
                    let bytes = hex::decode(encoded)
                        .with_context(|| format!("'{}' is not a hex byte string", encoded))?;
                    let title = title.clone().unwrap_or_else(|| encoded.clone());
                    send(sender, OutputToken::Report(DumpReport::new(bytes.as_slice(), &title)?))?;
                }
            }
            Self::File {
                paths,
                offset,
                length,
            } => {
                for path in paths {
                    info!("dumping file {}", path.display());
                    let report = file_report(path, *offset, *length)?;
                    send(sender, OutputToken::Report(report))?;
                }
            }
            Self::Demo => {
                info!("dumping the samples");
                for token in demo_tokens()? {
                    send(sender, token)?;
                }
            }
        }

        Ok(())
    }
}

fn send(sender: &Sender<OutputToken>, token: OutputToken) -> AppResult<()> {
    sender
        .send(token)
        .map_err(|_| anyhow!("the displayer stopped receiving output"))
}

/// Read only the selected window of the file.
fn file_report(path: &Path, offset: usize, length: Option<usize>) -> AppResult<DumpReport> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let size = file
        .metadata()
        .with_context(|| format!("Failed to read the size of {}", path.display()))?
        .len();
    let start = offset as u64;
    let end = match length {
        Some(length) => start.checked_add(length as u64),
        None => Some(size),
    };
    let end = end.filter(|end| start <= *end && *end <= size).ok_or_else(|| {
        let wanted = match length {
            Some(length) => format!("{} bytes", length),
            None => "up to the end".to_string(),
        };
        anyhow!(
            "Could not READ {} at offset 0x{:04X} of {}, file size is {} bytes.",
            wanted,
            offset,
            path.display(),
            size
        )
    })?;

    let mut window = Vec::new();
    file.seek(SeekFrom::Start(start))
        .with_context(|| format!("Failed to seek in {}", path.display()))?;
    file.take(end - start)
        .read_to_end(&mut window)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(DumpReport::new(window.as_slice(), &path.display().to_string())?)
}
