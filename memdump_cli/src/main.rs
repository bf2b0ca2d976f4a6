use std::{io, path::PathBuf, sync::mpsc::channel, thread::spawn};

use anyhow::{anyhow, Result};
use clap::Parser;
use log::debug;
use memdump_cli::{CliDisplayer, Config, Displayer, DumpCommand, OutputToken};

/// Memory dumper
/// Prints the raw bytes of values, byte strings or files with their offset,
/// hexadecimal, decimal, octal, binary and character forms.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// YAML configuration file (MEMDUMP_CONFIG is used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print hexadecimal digits in uppercase
    #[arg(long)]
    uppercase: bool,

    /// Do not print the dump address line
    #[arg(long)]
    no_address: bool,

    /// Print one hex line per dump
    #[arg(long)]
    compact: bool,

    /// Log what is being done on standard error
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: DumpCommand,
}

impl CommandLineArguments {
    fn configuration(&self) -> Result<Config> {
        let file = match Config::locate(self.config.clone()) {
            Some(path) => {
                debug!("loading config from {}", path.display());
                Config::load(&path)?
            }
            None => Config::default(),
        };
        let flags = Config {
            uppercase: self.uppercase.then_some(true),
            show_address: self.no_address.then_some(false),
            compact: self.compact.then_some(true),
            ..Config::default()
        };

        Ok(file.merge(flags))
    }
}

fn main() -> Result<()> {
    let parameters = CommandLineArguments::parse();
    let level = if parameters.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = parameters.configuration()?;
    let (sender, receiver) = channel::<OutputToken>();
    let mut displayer = CliDisplayer::new(io::stdout(), config.dump_format(), config.compact());
    let join = spawn(move || displayer.display(receiver));

    let result = parameters.command.run(&sender);
    drop(sender);
    join.join()
        .map_err(|_| anyhow!("the displayer thread panicked"))??;

    result
}
