//! Tests pinning down exact line/column reporting for each error class.
//!
//! Lines and columns are 1-based; columns count code points since the
//! last newline, so multi-byte characters and tabs each count as one.

use gitconf_lexer::{Event, Parser};

#[test]
fn stray_bracket_reports_line_and_column() {
    let mut parser = Parser::new(b"\n\n\n    ]");
    let err = parser.next_event().unwrap_err();
    assert_eq!(err.line, 4);
    assert_eq!(err.column, 5);
    assert_eq!(
        err.to_string(),
        "[4, 5] Unexpected ']', expecting '[', NAME, ';' or '#'."
    );
}

#[test]
fn eof_in_raw_string_reports_the_final_cursor_position() {
    let mut parser = Parser::new(b"\nkey=`raw value\n");
    let err = parser.next_event().unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.column, 1);
    assert_eq!(err.message, "Unterminated raw string");
}

#[test]
fn comment_marker_inside_section_header_is_an_error() {
    // Deliberate asymmetry with key lines: inside the brackets a comment
    // marker before the ']' is malformed input, not a comment.
    let mut parser = Parser::new(b"[section # This is a comment ]\n");
    let err = parser.next_event().unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 10);
    assert_eq!(err.message, "Unexpected '#', expecting ']'.");
}

#[test]
fn invalid_encoding_reports_the_offending_byte() {
    let mut input = b"[section \"parameter".to_vec();
    input.extend_from_slice(&[0xE0, 0x80, 0xA2]);
    input.push(b']');

    let mut parser = Parser::new(&input);
    let err = parser.next_event().unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 20);
    assert_eq!(err.message, "UTF-8 encoding error");
}

#[test]
fn truncated_multibyte_sequence_at_end_of_input() {
    // "é" with its continuation byte chopped off.
    let mut parser = Parser::new(&[b'k', b'e', b'y', b'=', 0xC3]);
    let err = parser.next_event().unwrap_err();
    assert_eq!(err.message, "UTF-8 encoding error");
    assert_eq!((err.line, err.column), (1, 5));
}

#[test]
fn invalid_encoding_inside_comment_terminates() {
    let mut input = b"# comment ".to_vec();
    input.push(0xFF);
    input.extend_from_slice(b" more\nkey = value\n");

    let mut parser = Parser::new(&input);
    let err = parser.next_event().unwrap_err();
    assert_eq!(err.message, "UTF-8 encoding error");
    assert_eq!((err.line, err.column), (1, 11));
    // The key after the bad byte is never reached.
    assert_eq!(parser.next_event().unwrap_err(), err);
    assert_eq!(parser.key(), "");
}

#[test]
fn error_column_counts_code_points_not_bytes() {
    // Two-byte characters before the stray ']' still count one column each.
    let mut parser = Parser::new("héllo ]".as_bytes());
    let err = parser.next_event().unwrap_err();
    assert_eq!((err.line, err.column), (1, 7));
    assert_eq!(err.message, "Unexpected ']', expecting '=', ';' or '#'.");
}

#[test]
fn fields_remain_readable_after_an_error() {
    let file = b"[section]\nkey = value\nbroken = \"\n";
    let mut parser = Parser::new(file);
    assert_eq!(parser.next_event().expect("parse failed"), Event::Section);
    assert_eq!(parser.next_event().expect("parse failed"), Event::Key);
    parser.next_event().unwrap_err();
    // Section context from before the failure is still visible.
    assert_eq!(parser.section(), "section");
}
