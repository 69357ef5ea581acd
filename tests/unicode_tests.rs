//! Tests for Unicode handling in names, values and whitespace.
//!
//! Name and whitespace classification use the full Unicode property
//! tables, so non-ASCII section and key names behave like ASCII ones.

use gitconf_lexer::{Event, Parser};

#[test]
fn non_ascii_section_and_key_names() {
    let file = "[sección \"parámetro\"]\nschlüssel = wert\n".as_bytes();
    let mut parser = Parser::new(file);

    assert_eq!(parser.next_event().expect("parse failed"), Event::Section);
    assert_eq!(parser.section(), "sección");
    assert_eq!(parser.parameter(), "parámetro");

    assert_eq!(parser.next_event().expect("parse failed"), Event::Key);
    assert_eq!(parser.key(), "schlüssel");
    assert_eq!(parser.value(), "wert");

    assert_eq!(parser.next_event().expect("parse failed"), Event::EndOfInput);
}

#[test]
fn cjk_names_and_values() {
    let file = "[設定]\n名前 = 値です\n".as_bytes();
    let mut parser = Parser::new(file);

    assert_eq!(parser.next_event().expect("parse failed"), Event::Section);
    assert_eq!(parser.section(), "設定");

    assert_eq!(parser.next_event().expect("parse failed"), Event::Key);
    assert_eq!(parser.key(), "名前");
    assert_eq!(parser.value(), "値です");

    assert_eq!(parser.next_event().expect("parse failed"), Event::EndOfInput);
}

#[test]
fn unicode_whitespace_separates_tokens() {
    // U+00A0 no-break space between name and '=' and around the value.
    let file = "key\u{00A0}=\u{00A0}value\u{00A0}\n".as_bytes();
    let mut parser = Parser::new(file);

    assert_eq!(parser.next_event().expect("parse failed"), Event::Key);
    assert_eq!(parser.key(), "key");
    assert_eq!(parser.value(), "value");
}

#[test]
fn plain_value_preserves_internal_unicode_whitespace() {
    let file = "key = value\u{3000}with ideographic space \n".as_bytes();
    let mut parser = Parser::new(file);

    assert_eq!(parser.next_event().expect("parse failed"), Event::Key);
    assert_eq!(parser.value(), "value\u{3000}with ideographic space");
}

#[test]
fn emoji_in_quoted_and_raw_values() {
    let file = "key = \"crab \u{1F980}\"\nraw = `multi\n\u{1F980}\nline`\n".as_bytes();
    let mut parser = Parser::new(file);

    assert_eq!(parser.next_event().expect("parse failed"), Event::Key);
    assert_eq!(parser.value(), "crab \u{1F980}");

    assert_eq!(parser.next_event().expect("parse failed"), Event::Key);
    assert_eq!(parser.key(), "raw");
    assert_eq!(parser.value(), "multi\n\u{1F980}\nline");

    assert_eq!(parser.next_event().expect("parse failed"), Event::EndOfInput);
}
