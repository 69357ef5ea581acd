//! # Gitconf Lexer
//!
//! A streaming pull-based lexer for git-style configuration files with
//! precise error positions.
//!
//! ## Overview
//!
//! This crate scans a simple textual configuration format similar to the
//! one used by git: named sections with an optional quoted parameter,
//! key/value pairs, and line comments. The parser is a pull-based scanner
//! over an in-memory byte buffer; the caller drives it one event at a
//! time and reads the current section, parameter, key and value after
//! each successful advance. No in-memory document is built: consumers
//! assemble whatever structure they need from the event stream.
//!
//! ## Format
//!
//! Input must be UTF-8 encoded. A section starts with its name and an
//! optional string parameter in square brackets and extends to the next
//! section header. Keys are a name, usually followed by `=` and a value;
//! a key without `=` has an empty value and is conventionally read as a
//! boolean-style flag. Section and key names consist of Unicode letters
//! and digits plus `.`, `_` and `-`.
//!
//! Values come in three syntaxes:
//!
//! - **Plain text**: everything between the `=` and the end of the line
//!   (or start of a comment), with surrounding but not internal
//!   whitespace stripped.
//! - **Quoted string**: `"`-delimited, supporting the escape sequences
//!   `\\`, `\"`, `\n`, `\r` and `\t`. A quoted string must not contain a
//!   literal newline.
//! - **Raw string**: backtick-delimited, a literal copy of every
//!   character in between, newlines included, with no escape processing.
//!
//! Comments start with `;` or `#` and continue to the end of the line.
//! Blank lines and comment-only lines are ignored. Inside a section
//! header a comment marker before the closing `]` is a syntax error, not
//! a comment.
//!
//! ## Quick Start
//!
//! ```rust
//! use gitconf_lexer::{Event, Parser};
//!
//! let source = br#"
//! ; Global options
//! debug = true
//!
//! [host "example.org"]
//! port = 8080
//! user-name = example
//! "#;
//!
//! let mut parser = Parser::new(source);
//! loop {
//!     match parser.next_event()? {
//!         Event::Section => println!("section {} ({})", parser.section(), parser.parameter()),
//!         Event::Key => println!("  {} = {}", parser.key(), parser.value()),
//!         Event::EndOfInput => break,
//!     }
//! }
//! # Ok::<(), gitconf_lexer::ParseError>(())
//! ```
//!
//! ## Error Handling
//!
//! The first malformed construct latches a [`ParseError`] with the exact
//! 1-based line and column of the problem; the same error is returned
//! from every subsequent call without re-parsing:
//!
//! ```rust
//! use gitconf_lexer::Parser;
//!
//! let mut parser = Parser::new(b"[section # not a comment here ]");
//! let err = parser.next_event().unwrap_err();
//! assert_eq!((err.line, err.column), (1, 10));
//! assert_eq!(err.to_string(), "[1, 10] Unexpected '#', expecting ']'.");
//! assert_eq!(parser.next_event().unwrap_err(), err);
//! ```
//!
//! All errors are diagnosed lazily, including UTF-8 encoding errors: the
//! input buffer is never validated up front, and a malformed sequence is
//! only reported when the scanner reaches it.

pub mod error;
pub mod parser;


pub use error::{ParseError, Position};
pub use parser::{Event, Parser};
