//! Character source with unlimited pushback
//!
//! The source wraps either an in-memory string or a line-buffered stream.
//! Stream sources are pulled one line at a time, only when the buffer and the
//! pushback stack are both exhausted.

use crate::error::ScanError;
use smallvec::SmallVec;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Input accepted by [`crate::TokenScanner::set_input`]
pub enum Input<'a> {
    /// Complete in-memory text
    Text(String),
    /// Line-readable stream, read lazily
    Stream(Box<dyn BufRead + 'a>),
}

impl<'a> Input<'a> {
    /// Creates a text input
    pub fn text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Creates a stream input from any buffered reader
    pub fn reader<R: BufRead + 'a>(reader: R) -> Self {
        Input::Stream(Box::new(reader))
    }

    /// Opens a file as a line stream
    pub fn file<P: AsRef<Path>>(path: P) -> io::Result<Input<'static>> {
        let file = File::open(path)?;
        Ok(Input::Stream(Box::new(BufReader::new(file))))
    }
}

impl From<&str> for Input<'_> {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input<'_> {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Characters pulled from the input, with a LIFO pushback stack in front
pub(crate) struct CharSource<'a> {
    /// Current line (stream) or whole text
    buffer: String,
    /// Byte position within `buffer`
    cursor: usize,
    /// Characters consumed since the last reset, minus pushed-back ones
    offset: usize,
    /// Pushed-back characters, most recent last
    saved: SmallVec<[char; 8]>,
    /// Remaining stream, `None` for text input
    reader: Option<Box<dyn BufRead + 'a>>,
}

impl<'a> CharSource<'a> {
    pub(crate) fn new(input: Input<'a>) -> Self {
        let mut source = Self {
            buffer: String::new(),
            cursor: 0,
            offset: 0,
            saved: SmallVec::new(),
            reader: None,
        };
        source.reset(input);
        source
    }

    /// Replaces the input and clears every buffer
    pub(crate) fn reset(&mut self, input: Input<'a>) {
        self.cursor = 0;
        self.offset = 0;
        self.saved.clear();
        match input {
            Input::Text(text) => {
                debug!(chars = text.chars().count(), "scanner input set to text");
                self.buffer = text;
                self.reader = None;
            }
            Input::Stream(reader) => {
                debug!("scanner input set to stream");
                self.buffer.clear();
                self.reader = Some(reader);
            }
        }
    }

    /// Returns the next character, or `None` at end of input
    pub(crate) fn get_char(&mut self) -> Result<Option<char>, ScanError> {
        if let Some(ch) = self.saved.pop() {
            self.offset += 1;
            return Ok(Some(ch));
        }
        if self.cursor >= self.buffer.len() && !self.fill_buffer()? {
            return Ok(None);
        }
        match self.buffer[self.cursor..].chars().next() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                self.offset += 1;
                Ok(Some(ch))
            }
            None => Ok(None),
        }
    }

    /// Pushes a character back to be returned by the next `get_char`
    ///
    /// Pushing back a character that was never read (at offset 0) leaves the
    /// offset at 0; re-reading it then counts it once.
    pub(crate) fn save_char(&mut self, ch: char) {
        self.offset = self.offset.saturating_sub(1);
        self.saved.push(ch);
    }

    /// Characters consumed and not pushed back since the last reset
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Text currently held in the line buffer
    pub(crate) fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Reads the next line of a stream source; false when nothing is left
    fn fill_buffer(&mut self) -> Result<bool, ScanError> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(false);
        };
        self.buffer.clear();
        self.cursor = 0;
        let bytes_read = reader.read_line(&mut self.buffer)?;
        trace!(bytes = bytes_read, offset = self.offset, "read line from stream");
        Ok(bytes_read > 0)
    }
}
