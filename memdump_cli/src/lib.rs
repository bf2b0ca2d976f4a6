mod commands;
mod config;
mod demo;
mod displayer;
mod input;

pub use commands::DumpCommand;
pub use config::{Config, CONFIG_ENV_VAR};
pub use demo::{demo_tokens, Code, NamedValue, WordView};
pub use displayer::{CliDisplayer, Displayer, OutputToken};
pub use input::{parse_signed, parse_unsigned, value_report, ValueKind};

pub type AppResult<T> = anyhow::Result<T>;
