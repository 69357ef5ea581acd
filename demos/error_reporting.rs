//! Error reporting: show how malformed inputs are diagnosed, how the
//! first error latches, and how a diagnostic can be shipped as JSON.
//!
//! Run with: cargo run --example error_reporting

use gitconf_lexer::Parser;

fn main() {
    let broken: [(&str, &[u8]); 5] = [
        ("stray bracket", b"\n\n\n    ]"),
        ("comment inside header", b"[section # comment ]"),
        ("invalid escape", b"[section \"\\b\"]"),
        ("unterminated string", b"key = \"no closing quote\n"),
        ("unterminated raw string", b"key = `\n\n"),
    ];

    for (label, input) in broken {
        let mut parser = Parser::new(input);
        match parser.next_event() {
            Ok(event) => println!("{label}: unexpectedly parsed {event:?}"),
            Err(err) => {
                println!("{label}: {err}");

                // The error is latched: asking again reports the same
                // position without rescanning the input.
                let again = parser.next_event().unwrap_err();
                assert_eq!(again, err);

                match serde_json::to_string(&err) {
                    Ok(json) => println!("  as JSON: {json}"),
                    Err(err) => println!("  serialization failed: {err}"),
                }
            }
        }
    }
}
