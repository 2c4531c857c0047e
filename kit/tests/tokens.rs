//! Scalar token parsers driven through the facade.
use jsonic::{ErrorKind, JsonParser, SourceError, StringParser, Symbol, factory, from_str};

#[test_case::test_case(r#""Hello""#, "Hello"; "plain")]
#[test_case::test_case(r#""foo bar baz""#, "foo bar baz"; "spaces")]
#[test_case::test_case(r#""""#, ""; "empty")]
#[test_case::test_case("\"a new \n newline\"", "a new \n newline"; "raw newline")]
#[test_case::test_case(r#""the name is \"cool\"""#, r#"the name is "cool""#; "escaped quotes")]
#[test_case::test_case(r#""C:\temp""#, r"C:\temp"; "escape kept before other characters")]
#[test_case::test_case(r#""this is some \"cool\" "shizz""#, r#"this is some "cool" "#; "early return")]
fn test_string(input: &str, expected: &str) {
    assert_eq!(from_str(&factory::string(), input).unwrap(), expected);
}

#[test_case::test_case("Hello"; "no quotes")]
#[test_case::test_case("Hello\""; "closing quote only")]
#[test_case::test_case(" \"Hello\""; "leading whitespace")]
fn test_string_missing_opening_quote(input: &str) {
    let err = from_str(&factory::string(), input).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ExpectedSymbol(Symbol::DoubleQuote)));
}

#[test_case::test_case(r#""Hello\""#; "escaped terminator")]
#[test_case::test_case(r#""He\"llo\""#; "escaped terminator after escaped quote")]
#[test_case::test_case(r#""dangling\"#; "dangling escape")]
fn test_string_escaped_terminator(input: &str) {
    let err = from_str(&factory::string(), input).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::EscapedTerminator));
}

#[test]
fn test_string_unterminated() {
    for input in ["\"", "\"Hello"] {
        let err = from_str(&factory::string(), input).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Source(SourceError::Exhausted)), "{input}");
    }
}

#[test]
fn test_custom_escape_character() {
    let parser = StringParser::with_escape('%');
    assert_eq!(from_str(&parser, r#""100%" sure""#).unwrap(), r#"100" sure"#);
}

#[test_case::test_case("true", true; "true")]
#[test_case::test_case("false", false; "false")]
#[test_case::test_case("trueSOME", true; "early return")]
#[test_case::test_case("true\tX", true; "trailing garbage ignored")]
fn test_boolean(input: &str, expected: bool) {
    assert_eq!(from_str(&factory::boolean(), input).unwrap(), expected);
}

#[test_case::test_case("ture"; "transposed")]
#[test_case::test_case("fals"; "truncated")]
#[test_case::test_case("TRUE"; "uppercase")]
#[test_case::test_case(" true"; "leading whitespace")]
fn test_boolean_errors(input: &str) {
    assert!(from_str(&factory::boolean(), input).is_err());
}

#[test]
fn test_boolean_names_both_literals() {
    let err = from_str(&factory::boolean(), "yes").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ExpectedBoolean('y')));
}

#[test]
fn test_null() {
    from_str(&factory::null(), "null").unwrap();
    let err = from_str(&factory::null(), "nul").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ExpectedCharacter('l')));
}

#[test]
fn test_mapped_parser() {
    let parser = factory::boolean().map(|b| if b { 1 } else { 0 });
    assert_eq!(from_str(&parser, "true").unwrap(), 1);
    assert_eq!(from_str(&parser, "false").unwrap(), 0);
}
