//! Line batching over a buffered reader.

use std::io::{self, BufRead};
use std::num::NonZeroUsize;

/// Yields the non-blank lines of a source in batches.
///
/// Each line is trimmed; lines that are empty after trimming are skipped and
/// counted. A batch closes once it holds `batch_size` lines, or at end of
/// input. Without a batch size the whole source is one batch.
pub struct BatchReader<R> {
    reader: R,
    batch_size: Option<NonZeroUsize>,
    line: String,
    done: bool,
    lines_read: u64,
    blank_lines: u64,
}

impl<R: BufRead> BatchReader<R> {
    /// Wraps `reader`.
    pub fn new(reader: R, batch_size: Option<NonZeroUsize>) -> Self {
        Self {
            reader,
            batch_size,
            line: String::with_capacity(256),
            done: false,
            lines_read: 0,
            blank_lines: 0,
        }
    }

    /// Reads the next batch, or `None` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates read failures, including `InvalidData` for input that is not
    /// valid UTF-8. The reader stops after the first error.
    pub fn next_batch(&mut self) -> io::Result<Option<Vec<String>>> {
        if self.done {
            return Ok(None);
        }

        let mut batch = Vec::new();
        loop {
            self.line.clear();
            let n = match self.reader.read_line(&mut self.line) {
                Ok(n) => n,
                Err(e) => {
                    self.done = true;
                    return Err(e);
                }
            };
            if n == 0 {
                self.done = true;
                break;
            }

            self.lines_read += 1;
            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                self.blank_lines += 1;
                continue;
            }
            batch.push(trimmed.to_owned());

            if self.batch_size.is_some_and(|n| batch.len() >= n.get()) {
                break;
            }
        }

        Ok((!batch.is_empty()).then_some(batch))
    }

    /// Physical lines consumed so far, blank ones included.
    #[inline(always)]
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Lines skipped because they were blank.
    #[inline(always)]
    pub fn blank_lines(&self) -> u64 {
        self.blank_lines
    }
}

impl<R: BufRead> Iterator for BatchReader<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn batches(input: &str, size: Option<usize>) -> Vec<Vec<String>> {
        let size = size.and_then(NonZeroUsize::new);
        BatchReader::new(Cursor::new(input), size)
            .collect::<io::Result<_>>()
            .unwrap()
    }

    #[test]
    fn whole_source_is_one_batch() {
        let out = batches("a\nb\nc\n", None);
        assert_eq!(out, [["a", "b", "c"]]);
    }

    #[test]
    fn fixed_size_batches() {
        let out = batches("a\nb\nc\nd\ne", Some(2));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], ["a", "b"]);
        assert_eq!(out[1], ["c", "d"]);
        assert_eq!(out[2], ["e"]);
    }

    #[test]
    fn lines_are_trimmed_and_blanks_skipped() {
        let mut r = BatchReader::new(Cursor::new("  a  \n\n   \n\tb\r\n"), None);
        let batch = r.next_batch().unwrap().unwrap();
        assert_eq!(batch, ["a", "b"]);
        assert_eq!(r.lines_read(), 4);
        assert_eq!(r.blank_lines(), 2);
        assert!(r.next_batch().unwrap().is_none());
    }

    #[test]
    fn blank_lines_do_not_count_toward_batch() {
        let out = batches("a\n\n\nb\nc", Some(2));
        assert_eq!(out[0], ["a", "b"]);
        assert_eq!(out[1], ["c"]);
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(batches("", None).is_empty());
        assert!(batches("\n\n", Some(1)).is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let mut r = BatchReader::new(Cursor::new(bytes), Some(NonZeroUsize::MIN));
        assert_eq!(r.next_batch().unwrap().unwrap(), ["ok"]);
        let err = r.next_batch().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(r.next_batch().unwrap().is_none());
    }
}
