//! Pull-based scanner for git-style configuration files
//!
//! This module provides the core scanning engine, converting a raw byte
//! buffer into a stream of [`Event`]s. The caller drives progress by
//! calling [`Parser::next_event`] repeatedly until [`Event::EndOfInput`]
//! is produced, reading the section/parameter/key/value accessors after
//! each successful advance.

use crate::error::{ParseError, Position};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Rune accumulation buffer for quoted strings and plain values.
///
/// Most values fit inline, so short configuration lines never touch the
/// heap while scanning.
type RuneBuf = SmallVec<[char; 32]>;

/// A structural event detected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// A new section header in the configuration file.
    Section,
    /// A new key (with or without a value) in the configuration file.
    Key,
    /// The end of the configuration file.
    EndOfInput,
}

/// The decoded code point under the cursor, or one of the sentinel
/// cursor states.
///
/// `EndOfInput` and `Invalid` are terminal: once reached, further reads
/// are no-ops. Grammar loops treat `Invalid` exactly like end of input so
/// they terminate without consuming past the offending byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rune {
    /// Nothing has been read yet.
    Start,
    /// A real decoded code point.
    Char(char),
    /// The input buffer is exhausted.
    EndOfInput,
    /// The cursor hit a malformed UTF-8 sequence.
    Invalid,
}

/// Latch-once error state. `Errored` is terminal: only the recorded
/// error is reported from then on, never a rescan.
#[derive(Debug, Clone)]
enum State {
    Running,
    Errored(ParseError),
}

/// A streaming parser for git-style configuration files.
///
/// The parser borrows the input buffer for its lifetime and holds all
/// cursor and result state. It is single-threaded and synchronous: each
/// call to [`Parser::next_event`] scans exactly one section header or
/// key line (skipping blank lines and comments) and returns promptly.
///
/// ```rust
/// use gitconf_lexer::{Event, Parser};
///
/// let mut parser = Parser::new(b"[core]\n\teditor = vim\n");
/// assert_eq!(parser.next_event()?, Event::Section);
/// assert_eq!(parser.section(), "core");
/// assert_eq!(parser.next_event()?, Event::Key);
/// assert_eq!(parser.key(), "editor");
/// assert_eq!(parser.value(), "vim");
/// assert_eq!(parser.next_event()?, Event::EndOfInput);
/// # Ok::<(), gitconf_lexer::ParseError>(())
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    section: String,
    parameter: String,
    key: String,
    value: String,

    input: &'a [u8],
    current: Rune,
    /// Byte offset of the current rune.
    pos: usize,
    /// Byte offset the next rune will be decoded from.
    next_pos: usize,
    /// Line of the current rune. Becomes 1-based on the first read.
    line: usize,
    /// Column of the current rune, in code points since the last newline.
    col: usize,
    state: State,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given input bytes.
    ///
    /// The input is expected to be UTF-8 encoded; this is not verified up
    /// front. Malformed sequences are diagnosed lazily when the cursor
    /// reaches them.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            section: String::new(),
            parameter: String::new(),
            key: String::new(),
            value: String::new(),
            input,
            current: Rune::Start,
            pos: 0,
            next_pos: 0,
            line: 0,
            col: 0,
            state: State::Running,
        }
    }

    /// Advances to the next section header or key in the file.
    ///
    /// Whitespace, blank lines and comments are skipped. On success the
    /// accessors reflect the event just produced: after
    /// [`Event::Section`], [`section`](Self::section) and
    /// [`parameter`](Self::parameter) are updated and key/value are
    /// empty; after [`Event::Key`], [`key`](Self::key) and
    /// [`value`](Self::value) are updated while section and parameter
    /// keep reflecting the most recently opened section.
    ///
    /// The first malformed construct latches a [`ParseError`]; that same
    /// error is returned from this and every subsequent call without
    /// re-parsing.
    pub fn next_event(&mut self) -> Result<Event, ParseError> {
        loop {
            if let State::Errored(err) = &self.state {
                return Err(err.clone());
            }

            self.read();
            match self.current {
                Rune::EndOfInput => return Ok(Event::EndOfInput),
                Rune::Char('\n') => {}
                Rune::Char(';' | '#') => self.scan_comment(),
                Rune::Char('[') => {
                    self.read();
                    let (section, parameter) = self.parse_section();
                    self.section = section;
                    self.parameter = parameter;
                    self.key.clear();
                    self.value.clear();
                    return match &self.state {
                        State::Errored(err) => Err(err.clone()),
                        State::Running => Ok(Event::Section),
                    };
                }
                Rune::Char(c) if is_space(c) => {}
                Rune::Char(c) if is_name(c) => {
                    let (key, value) = self.parse_key();
                    self.key = key;
                    self.value = value;
                    return match &self.state {
                        State::Errored(err) => Err(err.clone()),
                        State::Running => Ok(Event::Key),
                    };
                }
                Rune::Char(_) => self.unexpected("'[', NAME, ';' or '#'"),
                // The encoding error was latched by read; the loop exits
                // through the state check above.
                Rune::Invalid => {}
                Rune::Start => unreachable!("cursor was not advanced"),
            }
        }
    }

    /// Current section name, empty if no section header has been seen.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Current section parameter, empty if the section has none.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Current key name, empty after a [`Event::Section`] event.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current value, empty if the key has no value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decodes the next code point, maintaining offset, line and column.
    ///
    /// Terminal cursor states are sticky: reading at `EndOfInput` or
    /// `Invalid` is a no-op. A malformed or truncated UTF-8 sequence
    /// latches an encoding error at the position of the offending byte.
    fn read(&mut self) {
        if matches!(self.current, Rune::EndOfInput | Rune::Invalid) {
            return;
        }

        if self.current == Rune::Char('\n') || self.next_pos == 0 {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }

        let len;
        if self.next_pos >= self.input.len() {
            self.current = Rune::EndOfInput;
            len = 0;
        } else {
            match decode_char(&self.input[self.next_pos..]) {
                Some((c, l)) => {
                    self.current = Rune::Char(c);
                    len = l;
                }
                None => {
                    self.fail("UTF-8 encoding error");
                    self.current = Rune::Invalid;
                    len = 1;
                }
            }
        }

        self.pos = self.next_pos;
        self.next_pos += len;
    }

    /// Latches an error at the current cursor position. Only the first
    /// error is kept.
    fn fail(&mut self, message: impl Into<String>) {
        if let State::Running = self.state {
            self.state = State::Errored(ParseError::new(
                Position {
                    line: self.line,
                    column: self.col,
                },
                message,
            ));
        }
    }

    /// Latches an "unexpected token" error naming the token(s) that
    /// would have been accepted at this point in the grammar.
    fn unexpected(&mut self, expected: &str) {
        match self.current {
            Rune::EndOfInput => self.fail(format!("Unexpected EOF, expecting {expected}.")),
            Rune::Char(c) => self.fail(format!("Unexpected {c:?}, expecting {expected}.")),
            // An encoding error was already latched for this position.
            Rune::Invalid | Rune::Start => {}
        }
    }

    /// Parses a section header. The cursor is just past the opening `[`.
    ///
    /// Grammar: `[` ws* NAME (ws+ (`"` STRING `"`)?)? ws* `]` ws*
    /// comment? (newline | EOF). A comment marker before the closing `]`
    /// is a syntax error, not a comment.
    fn parse_section(&mut self) -> (String, String) {
        self.scan_space();
        let name = self.parse_name();
        let mut parameter = String::new();

        if self.current != Rune::Char(']') {
            if !matches!(self.current, Rune::Char(c) if is_space(c)) {
                self.unexpected("']' or space");
            }

            self.scan_space();
            if self.current == Rune::Char('"') {
                self.read();
                parameter = self.parse_string();
                self.scan_space();
            }

            if self.current != Rune::Char(']') {
                self.unexpected("']'");
            }
        }

        self.read();
        self.scan_space();
        if matches!(self.current, Rune::Char(';' | '#')) {
            self.scan_comment();
        }

        if !self.at_line_end() {
            self.unexpected("'\\n' or EOF");
        }

        (name, parameter)
    }

    /// Parses a key line. The cursor is on the first character of the
    /// name.
    ///
    /// Grammar: NAME (ws* `=` ws* VALUE)? ws* comment? (newline | EOF).
    /// A key with no `=` yields an empty value, conventionally used as a
    /// boolean-style flag.
    fn parse_key(&mut self) -> (String, String) {
        let key = self.parse_name();
        self.scan_space();

        let mut value = String::new();
        let line_done = matches!(self.current, Rune::Char(';' | '#' | '\n'))
            || matches!(self.current, Rune::EndOfInput | Rune::Invalid);

        if !line_done {
            if self.current != Rune::Char('=') {
                self.unexpected("'=', ';' or '#'");
            }

            self.read();
            self.scan_space();
            match self.current {
                Rune::Char(';' | '#' | '\n') => {}
                Rune::Char('"') => {
                    self.read();
                    value = self.parse_string();
                }
                Rune::Char('`') => {
                    self.read();
                    value = self.parse_raw_string();
                }
                _ => value = self.parse_value(),
            }
        }

        self.scan_space();
        if matches!(self.current, Rune::Char(';' | '#')) {
            self.scan_comment();
        }

        if !self.at_line_end() {
            self.unexpected("'\\n' or EOF");
        }

        (key, value)
    }

    /// Parses a name: one or more Unicode letters, digits, `.`, `_` or
    /// `-`. Fails if the current rune cannot start a name.
    fn parse_name(&mut self) -> String {
        if !matches!(self.current, Rune::Char(c) if is_name(c)) {
            self.unexpected("NAME");
        }

        let start = self.pos;
        self.read();
        while matches!(self.current, Rune::Char(c) if is_name(c)) {
            self.read();
        }

        self.span_to_string(start, self.pos)
    }

    /// Parses a plain text value up to a comment marker, newline or end
    /// of input.
    ///
    /// Trailing whitespace is trimmed in the same single pass: `end`
    /// marks the rune count just past the last non-whitespace character,
    /// so whitespace is only committed once something follows it.
    fn parse_value(&mut self) -> String {
        let mut buf = RuneBuf::new();
        let mut end = 0;

        loop {
            match self.current {
                Rune::Char(';' | '#' | '\n') | Rune::EndOfInput | Rune::Invalid => {
                    return buf[..end].iter().collect();
                }
                Rune::Char(c) if is_space(c) => buf.push(c),
                Rune::Char(c) => {
                    buf.push(c);
                    end = buf.len();
                }
                Rune::Start => unreachable!("value scan before first read"),
            }

            self.read();
        }
    }

    /// Parses a quoted string body. The cursor is just past the opening
    /// `"`.
    fn parse_string(&mut self) -> String {
        let mut buf = RuneBuf::new();

        loop {
            match self.current {
                Rune::Char('"') => {
                    self.read();
                    return buf.iter().collect();
                }
                Rune::Char('\n') | Rune::EndOfInput => {
                    self.fail("unterminated string");
                    return String::new();
                }
                Rune::Invalid => return String::new(),
                Rune::Char('\\') => {
                    self.read();
                    self.parse_string_escape(&mut buf);
                }
                Rune::Char(c) => {
                    buf.push(c);
                    self.read();
                }
                Rune::Start => unreachable!("string scan before first read"),
            }
        }
    }

    /// Interprets one escape sequence. The cursor is on the character
    /// after the backslash; anything outside the recognized set is a
    /// fatal invalid-escape error.
    fn parse_string_escape(&mut self, buf: &mut RuneBuf) {
        let escaped = match self.current {
            Rune::Char(c @ ('\\' | '"')) => c,
            Rune::Char('n') => '\n',
            Rune::Char('r') => '\r',
            Rune::Char('t') => '\t',
            _ => {
                self.unexpected("'\\', '\"', 'n', 'r', 't'");
                return;
            }
        };

        buf.push(escaped);
        self.read();
    }

    /// Parses a raw string body. The cursor is just past the opening
    /// backtick; the value is the exact byte span up to the closing
    /// backtick with zero interpretation, newlines included.
    fn parse_raw_string(&mut self) -> String {
        let start = self.pos;

        loop {
            match self.current {
                Rune::Char('`') => {
                    let end = self.pos;
                    self.read();
                    return self.span_to_string(start, end);
                }
                Rune::EndOfInput => {
                    self.fail("Unterminated raw string");
                    return String::new();
                }
                Rune::Invalid => return String::new(),
                Rune::Char(_) => self.read(),
                Rune::Start => unreachable!("raw string scan before first read"),
            }
        }
    }

    /// Consumes a comment through (but not including) the next newline
    /// or end of input.
    fn scan_comment(&mut self) {
        while matches!(self.current, Rune::Char(c) if c != '\n') {
            self.read();
        }
    }

    /// Consumes a run of whitespace, newlines excluded.
    fn scan_space(&mut self) {
        while matches!(self.current, Rune::Char(c) if is_space(c)) {
            self.read();
        }
    }

    /// True at a line terminator or a terminal cursor state.
    fn at_line_end(&self) -> bool {
        matches!(
            self.current,
            Rune::Char('\n') | Rune::EndOfInput | Rune::Invalid
        )
    }

    /// Copies a byte span of the input. Spans handed in here were decoded
    /// rune by rune, so they always hold valid UTF-8.
    fn span_to_string(&self, start: usize, end: usize) -> String {
        std::str::from_utf8(&self.input[start..end]).map_or_else(|_| String::new(), str::to_owned)
    }
}

/// Decodes one UTF-8 code point from the front of `bytes`.
///
/// Returns `None` for a malformed leading byte, a truncated sequence, or
/// an invalid sequence (overlong encodings, surrogates, out-of-range
/// code points).
fn decode_char(bytes: &[u8]) -> Option<(char, usize)> {
    let first = *bytes.first()?;
    if first.is_ascii() {
        return Some((first as char, 1));
    }

    let len = match first {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };

    let seq = bytes.get(..len)?;
    let decoded = std::str::from_utf8(seq).ok()?;
    decoded.chars().next().map(|c| (c, len))
}

/// Whitespace classification: any Unicode whitespace except newline,
/// which is structurally significant.
fn is_space(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

/// Name classification: Unicode letters and digits plus `.`, `_`, `-`.
fn is_name(c: char) -> bool {
    c == '.' || c == '_' || c == '-' || c.is_alphabetic() || c.is_numeric()
}
