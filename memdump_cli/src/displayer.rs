use std::{io::Write, sync::mpsc::Receiver};

use memdump_lib::{DumpFormat, DumpReport};

use crate::AppResult;

#[derive(Debug)]
pub enum OutputToken {
    Marker { description: String },
    Note(String),
    Report(DumpReport),
}

pub trait Displayer {
    fn display(&mut self, receiver: Receiver<OutputToken>) -> AppResult<()>;
}

/// Owns the output; everything printed goes through its receiver, one token
/// at a time.
#[derive(Debug)]
pub struct CliDisplayer<T>
where
    T: Write,
{
    output: T,
    format: DumpFormat,
    compact: bool,
}

impl<T> CliDisplayer<T>
where
    T: Write,
{
    pub fn new(output: T, format: DumpFormat, compact: bool) -> Self {
        Self {
            output,
            format,
            compact,
        }
    }
}

impl<T> Displayer for CliDisplayer<T>
where
    T: Write,
{
    fn display(&mut self, receiver: Receiver<OutputToken>) -> AppResult<()> {
        while let Ok(token) = receiver.recv() {
            match token {
                OutputToken::Marker { description } => {
                    self.output
                        .write_all(format!("♯ {description}\n").as_bytes())?;
                }
                OutputToken::Note(line) => {
                    self.output.write_all(format!("{line}\n").as_bytes())?;
                }
                OutputToken::Report(report) if self.compact => {
                    self.output.write_all(
                        format!("{}\n", self.format.render_compact(&report)).as_bytes(),
                    )?;
                }
                OutputToken::Report(report) => {
                    self.format.write_report(&report, &mut self.output)?;
                }
            }
        }
        self.output.flush()?;

        Ok(())
    }
}
