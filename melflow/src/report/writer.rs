//! Seam for document exporters.

use super::document::Document;
use crate::errors::MelError;
use std::io::Write;

/// Serializes an assembled document.
///
/// Binary office formats live outside this crate and plug in here.
pub trait ReportWriter {
    /// Writes the document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying sink fails.
    fn write(&mut self, document: &Document) -> Result<(), MelError>;
}

/// Writes the document model as JSON.
#[derive(Debug)]
pub struct JsonReportWriter<W: Write> {
    inner: W,
    pretty: bool,
}

impl<W: Write> JsonReportWriter<W> {
    /// Creates a compact JSON writer.
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            pretty: false,
        }
    }

    /// Creates a pretty-printing JSON writer.
    #[must_use]
    pub const fn pretty(inner: W) -> Self {
        Self {
            inner,
            pretty: true,
        }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write(&mut self, document: &Document) -> Result<(), MelError> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut self.inner, document)
        } else {
            serde_json::to_writer(&mut self.inner, document)
        };

        result.map_err(|e| {
            if e.is_io() {
                MelError::Io(e.into())
            } else {
                MelError::Serialization(e.to_string())
            }
        })?;
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Block, Cell, Row, Table};

    fn document() -> Document {
        Document {
            title: None,
            blocks: vec![Block::Table(Table {
                header: Row {
                    cells: vec![Cell::bold("Subject")],
                    shading: Some("BFBFBF".to_string()),
                },
                rows: Vec::new(),
            })],
        }
    }

    #[test]
    fn test_json_writer() {
        let mut writer = JsonReportWriter::new(Vec::new());
        writer.write(&document()).unwrap();

        let bytes = writer.into_inner();
        let back: Document = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, document());
    }

    #[test]
    fn test_pretty_writer_is_multiline() {
        let mut writer = JsonReportWriter::pretty(Vec::new());
        writer.write(&document()).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(text.lines().count() > 1);
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_failure_is_reported() {
        let mut writer = JsonReportWriter::new(BrokenSink);
        let err = writer.write(&document()).unwrap_err();
        assert!(matches!(err, MelError::Io(_)));
    }
}
