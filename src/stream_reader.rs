use std::io::BufRead;

use aisgpsd::AisMessage;
use serde_json::Value;
use thiserror::Error;

/// Decoded AIS message stream reader
///
/// Reads one JSON object per line, as written by the libais decoder, and
/// yields it as an [`AisMessage`]. Blank lines are skipped.
///
/// A line that cannot be parsed is reported as an error for that line only,
/// reading continues with the next one. An I/O error is reported once and
/// ends the stream.
///
/// # Usage
///
/// ```no_run
/// let mut reader = AisStreamReader::new(std::io::stdin().lock());
///
/// while let Some(result) = reader.next_message() {
///     match result {
///         Ok(message) => println!("type {}", message["id"]),
///         Err(e) => eprintln!("line {}: {}", reader.line_number(), e),
///     }
/// }
/// ```
pub struct AisStreamReader<R> {
    input: R,
    line: Vec<u8>,
    line_number: u64,
    finished: bool,
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl<R: BufRead> AisStreamReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::new(),
            line_number: 0,
            finished: false,
        }
    }

    /// Line number of the last line returned (1-based)
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Read the next decoded message
    ///
    /// # Returns
    /// `None` at end of input (or after an I/O error has been returned)
    pub fn next_message(&mut self) -> Option<Result<AisMessage, StreamError>> {
        while !self.finished {
            self.line.clear();
            // Raw bytes: invalid UTF-8 is a bad line, not a broken stream
            match self.input.read_until(b'\n', &mut self.line) {
                Ok(0) => self.finished = true,
                Ok(_) => {
                    self.line_number += 1;
                    let trimmed = self.line.trim_ascii();
                    if trimmed.is_empty() {
                        continue;
                    }
                    return Some(Self::parse_line(trimmed));
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(StreamError::Io(e)));
                }
            }
        }
        None
    }

    fn parse_line(line: &[u8]) -> Result<AisMessage, StreamError> {
        match serde_json::from_slice::<Value>(line)? {
            Value::Object(message) => Ok(message),
            Value::Array(_) => Err(StreamError::NotAnObject("an array")),
            Value::String(_) => Err(StreamError::NotAnObject("a string")),
            Value::Number(_) => Err(StreamError::NotAnObject("a number")),
            Value::Bool(_) => Err(StreamError::NotAnObject("a boolean")),
            Value::Null => Err(StreamError::NotAnObject("null")),
        }
    }
}

impl<R: BufRead> Iterator for AisStreamReader<R> {
    type Item = Result<AisMessage, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_message()
    }
}
