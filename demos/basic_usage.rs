//! Basic usage: drive the parser over an in-memory configuration and
//! print every event.
//!
//! Run with: cargo run --example basic_usage

use gitconf_lexer::{Event, ParseError, Parser};

const SOURCE: &[u8] = br#"# Example configuration

; Global options
debug = true
log-file = "/var/log/app.log"

[host "example.org"]
port = 8080
user-name = example
banner = `Welcome!
This banner spans
several lines.`

[host "example.net"]
port = 9090        ; staging
read-only
"#;

fn main() -> Result<(), ParseError> {
    let mut parser = Parser::new(SOURCE);

    loop {
        match parser.next_event()? {
            Event::Section => {
                if parser.parameter().is_empty() {
                    println!("[{}]", parser.section());
                } else {
                    println!("[{} {:?}]", parser.section(), parser.parameter());
                }
            }
            Event::Key => {
                if parser.value().is_empty() {
                    println!("  {} (flag)", parser.key());
                } else {
                    println!("  {} = {:?}", parser.key(), parser.value());
                }
            }
            Event::EndOfInput => break,
        }
    }

    Ok(())
}
