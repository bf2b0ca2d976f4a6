use std::{fs, sync::mpsc::channel};

use memdump_cli::{DumpCommand, OutputToken, ValueKind};
use tempfile::TempDir;

fn collect(command: DumpCommand) -> (anyhow::Result<()>, Vec<OutputToken>) {
    let (sender, receiver) = channel::<OutputToken>();
    let result = command.run(&sender);
    drop(sender);

    (result, receiver.iter().collect())
}

fn reports(tokens: &[OutputToken]) -> Vec<&memdump_lib::DumpReport> {
    tokens
        .iter()
        .filter_map(|token| match token {
            OutputToken::Report(report) => Some(report),
            _ => None,
        })
        .collect()
}

#[test]
fn test_value_command() {
    let (result, tokens) = collect(DumpCommand::Value {
        kind: ValueKind::U16,
        literals: vec!["0x0102".to_string(), "65535".to_string()],
        title: None,
    });
    result.unwrap();

    let reports = reports(&tokens);
    assert_eq!(2, reports.len());
    assert_eq!("u16 0x0102", reports[0].title());
    assert_eq!(0x0102u16.to_ne_bytes().to_vec(), reports[0].bytes());
    assert_eq!(vec![0xff, 0xff], reports[1].bytes());
}

#[test]
fn test_value_command_stops_on_error() {
    let (result, tokens) = collect(DumpCommand::Value {
        kind: ValueKind::U8,
        literals: vec!["1".to_string(), "300".to_string(), "2".to_string()],
        title: Some("byte".to_string()),
    });

    assert!(result.unwrap_err().to_string().contains("'300'"));
    assert_eq!(1, reports(&tokens).len());
}

#[test]
fn test_bytes_command() {
    let (result, tokens) = collect(DumpCommand::Bytes {
        strings: vec!["48656c6c6f".to_string()],
        title: Some("greeting".to_string()),
    });
    result.unwrap();

    let reports = reports(&tokens);
    assert_eq!("greeting", reports[0].title());
    assert_eq!(b"Hello".to_vec(), reports[0].bytes());

    let (result, _) = collect(DumpCommand::Bytes {
        strings: vec!["abc".to_string()],
        title: None,
    });
    assert!(result.is_err());
}

#[test]
fn test_file_command() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("data.bin");
    fs::write(&path, [0u8, 1, 2, 3, 4, 5, 6, 7])?;

    let (result, tokens) = collect(DumpCommand::File {
        paths: vec![path.clone()],
        offset: 2,
        length: Some(3),
    });
    result?;
    let dumped = reports(&tokens);
    assert_eq!(vec![2, 3, 4], dumped[0].bytes());
    assert_eq!(path.display().to_string(), dumped[0].title());

    let (result, _) = collect(DumpCommand::File {
        paths: vec![path.clone()],
        offset: 6,
        length: Some(3),
    });
    assert_eq!(
        format!(
            "Could not READ 3 bytes at offset 0x0006 of {}, file size is 8 bytes.",
            path.display()
        ),
        result.unwrap_err().to_string()
    );

    let (result, _) = collect(DumpCommand::File {
        paths: vec![path.clone()],
        offset: 10,
        length: None,
    });
    assert_eq!(
        format!(
            "Could not READ up to the end at offset 0x000A of {}, file size is 8 bytes.",
            path.display()
        ),
        result.unwrap_err().to_string()
    );

    let (result, tokens) = collect(DumpCommand::File {
        paths: vec![path.clone()],
        offset: 5,
        length: None,
    });
    result?;
    assert_eq!(vec![5, 6, 7], reports(&tokens)[0].bytes());

    let (result, _) = collect(DumpCommand::File {
        paths: vec![path],
        offset: 8,
        length: None,
    });
    assert!(result.unwrap_err().to_string().contains("0 bytes wide"));

    Ok(())
}

#[test]
fn test_demo_command() {
    let (result, tokens) = collect(DumpCommand::Demo);
    result.unwrap();

    let reports = reports(&tokens);
    let bitfield = reports
        .iter()
        .find(|report| report.title() == "Bitfield record")
        .unwrap();
    assert_eq!(12, bitfield.size());
    assert_eq!(0xe5, bitfield.bytes()[0]);

    let word = reports
        .iter()
        .find(|report| report.title() == "WordView")
        .unwrap();
    assert_eq!(0xf010_0020_8040_0080u64.to_ne_bytes().to_vec(), word.bytes());

    assert!(tokens.iter().any(
        |token| matches!(token, OutputToken::Note(line) if line == "00101010")
    ));
    assert!(tokens.iter().any(
        |token| matches!(token, OutputToken::Note(line) if line == "HiVal:  255 [000000ff]")
    ));
}
