use super::types::LogLine;
use std::iter::Enumerate;
use std::str::Split;

/// Iterates over the non-blank lines of a log buffer.
///
/// Lines are separated by `\n`; a trailing `\r` is dropped so CRLF logs
/// tokenize the same way. A line that is empty after trimming is skipped
/// entirely and never reaches the aggregators.
pub struct Tokenizer<'a> {
    lines: Enumerate<Split<'a, char>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split('\n').enumerate(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = LogLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, raw) in self.lines.by_ref() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.trim().is_empty() {
                continue;
            }
            return Some(LogLine::new(idx + 1, line.split(' ').collect()));
        }
        None
    }
}
