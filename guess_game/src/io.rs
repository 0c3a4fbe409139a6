//! Line-based input and output collaborators for a session.
//!
//! Any `BufRead` is a [`LineSource`] and any `Write` is a [`LineSink`], so the
//! binary hands in stdin/stdout while tests hand in byte slices and `Vec<u8>`.

use std::io::{self, BufRead, Write};

pub trait LineSource {
    /// Blocks until a full line is available. `Ok(None)` means end of stream.
    /// Bytes that are not UTF-8 come back as replacement characters.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<B: BufRead> LineSource for B {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl<W: Write> LineSink for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{line}")?;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lines_then_eof() {
        let mut input = "42\r\nabc\nlast".as_bytes();
        assert_eq!(LineSource::read_line(&mut input).unwrap(), Some("42".to_string()));
        assert_eq!(LineSource::read_line(&mut input).unwrap(), Some("abc".to_string()));
        assert_eq!(LineSource::read_line(&mut input).unwrap(), Some("last".to_string()));
        assert_eq!(LineSource::read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut input = "\n".as_bytes();
        assert_eq!(LineSource::read_line(&mut input).unwrap(), Some(String::new()));
        assert_eq!(LineSource::read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_a_line_not_an_error() {
        let mut input: &[u8] = b"\xff\xfe\n7\n";
        let first = LineSource::read_line(&mut input).unwrap().unwrap();
        assert_eq!(first, "\u{FFFD}\u{FFFD}");
        assert_eq!(LineSource::read_line(&mut input).unwrap(), Some("7".to_string()));
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut out = Vec::new();
        out.write_line("hello").unwrap();
        out.write_line("world").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello\nworld\n");
    }
}
