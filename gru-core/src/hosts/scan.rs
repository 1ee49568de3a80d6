//! Incremental word scanner for host lists.
//!
//! Host lists are usually piped from other tools, so they arrive separated by
//! whatever the producer emitted: newlines, spaces, commas, semicolons or pipes,
//! and occasionally Unicode space characters copied from documents. The
//! scanner splits on all of them and never yields an empty word.

use std::io::{self, Read};

/// Default number of bytes requested from the reader per refill.
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024;

/// Reports whether `ch` separates two host names.
///
/// This is the Unicode `White_Space` set plus `,`, `;` and `|`.
pub fn is_delimiter(ch: char) -> bool {
    if ch <= '\u{00FF}' {
        return matches!(
            ch,
            ' ' | '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{00A0}' | ',' | ';' | '|'
        );
    }

    matches!(
        ch,
        '\u{2000}'..='\u{200A}'
            | '\u{1680}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Outcome of a single [`scan_words`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<'a> {
    /// A complete word was found.
    Token {
        /// Number of bytes consumed, including the trailing delimiter.
        advance: usize,
        /// The word itself, never empty.
        token: &'a [u8],
    },
    /// No complete word is available yet.
    NeedMore {
        /// Number of leading delimiter bytes that can be discarded.
        advance: usize,
    },
}

/// Decodes one code point from the front of `data`.
///
/// Invalid or truncated sequences decode as `None` with a width of one byte so
/// the scanner treats them as ordinary word bytes.
fn decode_char(data: &[u8]) -> (Option<char>, usize) {
    let width = match data[0] {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return (None, 1),
    };

    match data.get(..width).map(std::str::from_utf8) {
        Some(Ok(decoded)) => (decoded.chars().next(), width),
        _ => (None, 1),
    }
}

fn delimiter_at(data: &[u8]) -> (bool, usize) {
    let (ch, width) = decode_char(data);
    (ch.is_some_and(is_delimiter), width)
}

/// Splits the next word off the front of `data`.
///
/// Leading delimiters are skipped. A word is only returned once its trailing
/// delimiter has been seen, unless `at_eof` is set, in which case the rest of
/// the buffer is the final word. Otherwise the caller is asked for more data.
///
/// # Parameters
///
/// * `data` - Unconsumed input bytes
/// * `at_eof` - Whether `data` is the end of the input
///
/// # Returns
///
/// A [`Scan`] describing how many bytes to consume and the word found, if any.
pub fn scan_words(data: &[u8], at_eof: bool) -> Scan<'_> {
    let mut start = 0;
    while start < data.len() {
        let (delimiter, width) = delimiter_at(&data[start..]);
        if !delimiter {
            break;
        }
        start += width;
    }

    let mut end = start;
    while end < data.len() {
        let (delimiter, width) = delimiter_at(&data[end..]);
        if delimiter {
            return Scan::Token {
                advance: end + width,
                token: &data[start..end],
            };
        }
        end += width;
    }

    if at_eof && data.len() > start {
        return Scan::Token {
            advance: data.len(),
            token: &data[start..],
        };
    }

    Scan::NeedMore { advance: start }
}

/// Iterator over the host names of a reader.
///
/// Input is pulled in chunks and fed to [`scan_words`], so arbitrarily large
/// lists are handled without reading everything up front.
#[derive(Debug)]
pub struct HostScanner<R> {
    reader: R,
    buf: Vec<u8>,
    pos: usize,
    chunk_size: usize,
    eof: bool,
    done: bool,
}

impl<R: Read> HostScanner<R> {
    /// Creates a scanner reading [`DEFAULT_CHUNK_SIZE`] bytes at a time.
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// Creates a scanner with a custom refill size (at least one byte).
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pos: 0,
            chunk_size: chunk_size.max(1),
            eof: false,
            done: false,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }

        let len = self.buf.len();
        self.buf.resize(len + self.chunk_size, 0);
        loop {
            match self.reader.read(&mut self.buf[len..]) {
                Ok(0) => {
                    self.buf.truncate(len);
                    self.eof = true;
                    return Ok(());
                }
                Ok(read) => {
                    self.buf.truncate(len + read);
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    self.buf.truncate(len);
                    return Err(err);
                }
            }
        }
    }
}

impl<R: Read> Iterator for HostScanner<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match scan_words(&self.buf[self.pos..], self.eof) {
                Scan::Token { advance, token } => {
                    let host = String::from_utf8_lossy(token).into_owned();
                    self.pos += advance;
                    return Some(Ok(host));
                }
                Scan::NeedMore { advance } => {
                    self.pos += advance;
                    if self.eof {
                        self.done = true;
                        return None;
                    }
                }
            }

            if let Err(err) = self.fill() {
                self.done = true;
                return Some(Err(err));
            }
        }
    }
}
