//! Drivers over strings, byte streams and files.
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use jsonic::{
    Driver, Error, ErrorKind, JsonValue, NewlineConvention, ParseConfig, SourceError,
    default_dialect, factory, from_path, from_reader, from_str, from_str_with,
};

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("jsonic-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_reader_source() {
    let input = r#"{"name": "Zoë", "notes": ["𝄞", "€"]}"#;
    let value = from_reader(&default_dialect(), input.as_bytes(), ParseConfig::DEFAULT).unwrap();
    assert_eq!(value.get("name").and_then(JsonValue::as_str), Some("Zoë"));
    assert_eq!(value.to_string(), r#"{"name":"Zoë","notes":["𝄞","€"]}"#);
}

#[test]
fn test_reader_empty() {
    let err = from_reader(&default_dialect(), io::empty(), ParseConfig::DEFAULT).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Source(SourceError::Empty)));
}

#[test]
fn test_reader_invalid_utf8() {
    let bytes: &[u8] = &[b'[', b'"', 0xff, b'"', b']'];
    let err = from_reader(&default_dialect(), bytes, ParseConfig::DEFAULT).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Source(SourceError::InvalidUtf8 { .. })
    ));
}

#[test]
fn test_reader_failure_in_lookahead() {
    let bytes: &[u8] = &[b'[', b'n', 0xff, b']'];
    let err = from_reader(&default_dialect(), bytes, ParseConfig::DEFAULT).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Source(SourceError::InvalidUtf8 { bytes }) if bytes == &[0xff]
    ));
    assert_eq!((err.line(), err.column()), (1, 2));
}

#[test]
fn test_reader_truncated_sequence_keeps_next_character() {
    let bytes: &[u8] = &[b'[', 0xe2, b'"', b']'];
    let err = from_reader(&factory::string_array(), bytes, ParseConfig::DEFAULT).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Source(SourceError::InvalidUtf8 { bytes }) if bytes == &[0xe2]
    ));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn test_reader_io_error() {
    let err = from_reader(&default_dialect(), FailingReader, ParseConfig::DEFAULT).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Source(SourceError::Io(_))));
    assert!(err.to_string().ends_with("I/O error: disk on fire"));
}

#[test]
fn test_from_path() {
    let path = temp_file("ok.json", b"[true, false]\n");
    let parsed = from_path(&factory::array(factory::boolean()), &path, ParseConfig::DEFAULT);
    fs::remove_file(&path).unwrap();
    assert_eq!(parsed.unwrap(), vec![true, false]);
}

#[test]
fn test_from_path_syntax_error() {
    let path = temp_file("bad.json", b"[true,\n false,\n nil]");
    let parsed = from_path(&default_dialect(), &path, ParseConfig::DEFAULT);
    fs::remove_file(&path).unwrap();
    let err = parsed.unwrap_err();
    let parse_err = err.as_parse_error().unwrap();
    assert_eq!(parse_err.line(), 3);
    assert!(matches!(parse_err.kind(), ErrorKind::UnexpectedToken('n')));
}

#[test]
fn test_from_path_missing() {
    let path = std::env::temp_dir().join("jsonic-does-not-exist.json");
    let err = from_path(&default_dialect(), &path, ParseConfig::DEFAULT).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert!(err.as_parse_error().is_none());
    assert!(err.to_string().starts_with("failed to open"));
}

#[test]
fn test_early_return_by_default() {
    assert!(from_str(&factory::boolean(), "true x").unwrap());
    assert_eq!(from_str(&default_dialect(), "[1] [2]").unwrap().to_string(), "[1]");
}

#[test_case::test_case("true"; "exact")]
#[test_case::test_case("true  \n"; "trailing whitespace")]
#[test_case::test_case("true\r\n\t"; "trailing line break")]
fn test_ensure_consumed_accepts(input: &str) {
    let config = ParseConfig::new().with_ensure_consumed(true);
    assert!(from_str_with(&factory::boolean(), input, config).unwrap());
}

#[test]
fn test_ensure_consumed_rejects() {
    let config = ParseConfig::new().with_ensure_consumed(true);
    let err = from_str_with(&factory::boolean(), "true x", config).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TrailingContent('x')));
    assert_eq!(err.column(), 6);
}

#[test]
fn test_newline_conventions() {
    let input = "[\r\n1,\n2,\r\n@]";

    let err = from_str(&default_dialect(), input).unwrap_err();
    assert_eq!((err.line(), err.column()), (4, 1));

    let crlf = ParseConfig::new().with_newline(NewlineConvention::CrLf);
    let err = from_str_with(&default_dialect(), input, crlf).unwrap_err();
    assert_eq!((err.line(), err.column()), (3, 1));
}

#[test]
fn test_driver_reuse() {
    let driver = Driver::new(ParseConfig::new().with_ensure_consumed(true));
    assert!(driver.config().ensure_consumed);
    let dialect = default_dialect();
    for input in ["1", "[]", "{}", r#""s""#, "null "] {
        driver.parse_str(&dialect, input).unwrap();
    }
    assert!(driver.parse_str(&dialect, "1 2").is_err());
}
