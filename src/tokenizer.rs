//! Phase 1: Line Tokenizer
//!
//! The tokenizer converts one raw input line into a structured [`Line`]
//! record: indentation depth, name, separator kind, and value. It performs:
//! - Indentation counting
//! - Comment stripping (`#` outside quotes blanks the rest of the line)
//! - Quoting (`'` and `"` suspend delimiter recognition)
//! - Backslash escaping (`\n` and `\r` translated, everything else literal)
//! - List splitting on unescaped commas
//!
//! Each token is read in a single character-consuming pass so that the
//! quoting and escaping state stays local to that one read and escaped text
//! is never re-tokenized.

use crate::error::{ParseError, Result};
use crate::value::Value;
use std::collections::VecDeque;

/// A single tokenized line of a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A blank or comment-only line, to be ignored.
    Blank,
    /// A section declaration: `name:`.
    Section { indentation: usize, name: String },
    /// A setting declaration: `name = value`.
    ///
    /// The value is [`Value::Absent`], [`Value::String`], or [`Value::List`];
    /// the tokenizer never produces a group.
    Setting {
        indentation: usize,
        name: String,
        value: Value,
    },
}

/// Character cursor over one line of input.
///
/// The cursor owns the remaining characters of the line; consuming methods
/// pop from the front, and comment stripping simply clears the remainder.
struct Cursor {
    chars: VecDeque<char>,
    lineno: usize,
}

impl Cursor {
    fn new(line: &str, lineno: usize) -> Self {
        Self {
            chars: line.chars().collect(),
            lineno,
        }
    }

    fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    fn peek(&self) -> Option<char> {
        self.chars.front().copied()
    }

    /// Skip whitespace up to the next token, returning how many characters
    /// were skipped. A comment marker at the new position blanks the rest of
    /// the line.
    fn skip_whitespace(&mut self) -> usize {
        let mut skipped = 0;
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.pop_front();
            skipped += 1;
        }
        if self.peek() == Some('#') {
            self.chars.clear();
        }
        skipped
    }

    /// Read one token, stopping at an unescaped delimiter (not consumed),
    /// unescaped whitespace (consumed), or an unescaped comment marker
    /// (remainder discarded).
    ///
    /// Quote characters toggle a verbatim mode in which delimiters,
    /// whitespace, and `#` are literal; the non-active quote character is
    /// literal too. A backslash always escapes the following character,
    /// inside or outside quotes, translating `n` and `r` to LF and CR.
    fn read_token(&mut self, delimiters: &[char]) -> Result<String> {
        let mut token = String::new();
        let mut quote: Option<char> = None;
        loop {
            let Some(next) = self.peek() else { break };
            if quote.is_none() && delimiters.contains(&next) {
                break;
            }
            self.chars.pop_front();
            match next {
                '\'' | '"' => match quote {
                    None => quote = Some(next),
                    Some(open) if open == next => quote = None,
                    Some(_) => token.push(next),
                },
                '\\' => {
                    let Some(escaped) = self.chars.pop_front() else {
                        return Err(ParseError::TrailingEscape(self.lineno));
                    };
                    token.push(match escaped {
                        'n' => '\n',
                        'r' => '\r',
                        other => other,
                    });
                }
                '#' if quote.is_none() => {
                    self.chars.clear();
                    break;
                }
                ch if quote.is_none() && ch.is_whitespace() => break,
                ch => token.push(ch),
            }
        }
        if quote.is_some() {
            return Err(ParseError::UnterminatedQuote(self.lineno));
        }
        Ok(token)
    }
}

/// Tokenize one line of a configuration file.
///
/// `lineno` is the 1-based line number, used only for error reporting. The
/// line terminator must already be stripped; trailing whitespace is ignored.
pub fn tokenize(raw: &str, lineno: usize) -> Result<Line> {
    let mut cursor = Cursor::new(raw.trim_end(), lineno);

    let indentation = cursor.skip_whitespace();
    if cursor.is_empty() {
        return Ok(Line::Blank);
    }

    let name = cursor.read_token(&[':', '='])?;
    cursor.skip_whitespace();
    let separator = match cursor.peek() {
        Some(sep @ (':' | '=')) => sep,
        _ => return Err(ParseError::MissingSeparator(lineno)),
    };
    // The separator check comes first, so `= value` without a name reports
    // the missing name rather than a missing separator.
    if name.is_empty() {
        return Err(ParseError::MissingName(lineno));
    }
    cursor.chars.pop_front();
    cursor.skip_whitespace();

    if cursor.is_empty() {
        return Ok(match separator {
            ':' => Line::Section { indentation, name },
            _ => Line::Setting {
                indentation,
                name,
                value: Value::Absent,
            },
        });
    }
    if separator == ':' {
        return Err(ParseError::UnexpectedSectionValue(lineno));
    }

    // Assignment with content: read value tokens, promoting to a list on the
    // first comma. A single trailing comma after one token still produces a
    // one-element list, which is how the format distinguishes it from a
    // scalar.
    let mut items: Option<Vec<String>> = None;
    let mut token = String::new();
    while !cursor.is_empty() {
        token = cursor.read_token(&[','])?;
        cursor.skip_whitespace();
        if !cursor.is_empty() {
            if cursor.peek() == Some(',') {
                cursor.chars.pop_front();
                cursor.skip_whitespace();
                items.get_or_insert_with(Vec::new);
            } else {
                return Err(ParseError::TrailingCharacters(lineno));
            }
        }
        if let Some(items) = items.as_mut() {
            items.push(std::mem::take(&mut token));
        }
    }
    let value = match items {
        Some(items) => Value::List(items),
        None => Value::String(token),
    };
    Ok(Line::Setting {
        indentation,
        name,
        value,
    })
}
