//! Turns timeline entries into a document model.

use super::document::{Block, Cell, Document, Paragraph, ParagraphRole, Row, Table};
use crate::config::{ReportConfig, ReportLayout};
use crate::core::{Granularity, TimelineEntry};
use crate::markup;
use crate::markup::StyledRun;

/// Builds table or paragraph documents from timeline entries.
///
/// Output order always matches input order.
#[derive(Debug, Clone)]
pub struct ReportAssembler<'a> {
    config: &'a ReportConfig,
    granularity: Granularity,
}

impl<'a> ReportAssembler<'a> {
    /// Creates an assembler.
    #[must_use]
    pub const fn new(config: &'a ReportConfig, granularity: Granularity) -> Self {
        Self {
            config,
            granularity,
        }
    }

    /// Assembles a document in the configured layout.
    #[must_use]
    pub fn assemble(&self, entries: &[TimelineEntry], title: Option<&str>) -> Document {
        let mut blocks = Vec::new();
        if let Some(title) = title {
            blocks.push(Block::Heading {
                text: title.to_string(),
            });
        }

        match self.config.layout {
            ReportLayout::Table => blocks.push(Block::Table(self.table(entries))),
            ReportLayout::Paragraphs => blocks.extend(entries.iter().map(|entry| Block::Entry {
                paragraphs: self.paragraphs(entry),
            })),
        }

        Document {
            title: title.map(str::to_string),
            blocks,
        }
    }

    fn table(&self, entries: &[TimelineEntry]) -> Table {
        let header = Row {
            cells: self
                .config
                .headers
                .labels()
                .into_iter()
                .map(Cell::bold)
                .collect(),
            shading: Some(self.config.header_shading.clone()),
        };

        let rows = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Row {
                cells: vec![
                    Cell::plain(entry.cumulative_label(self.granularity)),
                    Cell::markup(&entry.subject),
                    Cell::markup(&entry.text),
                    Cell::plain(entry.inject_seconds.to_string()),
                ],
                shading: (index % 2 == 0).then(|| self.config.row_shading.clone()),
            })
            .collect();

        Table { header, rows }
    }

    fn paragraphs(&self, entry: &TimelineEntry) -> [Paragraph; 3] {
        [
            Paragraph {
                role: ParagraphRole::Time,
                runs: vec![StyledRun::plain(entry.cumulative_label(self.granularity))],
            },
            Paragraph {
                role: ParagraphRole::Subject,
                runs: markup::render(&entry.subject),
            },
            Paragraph {
                role: ParagraphRole::Body,
                runs: markup::render(&entry.text),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Event;
    use crate::timeline::{self, Baseline};
    use pretty_assertions::assert_eq;

    fn entries() -> Vec<TimelineEntry> {
        let events = vec![
            Event::new("1", "<B>Start</B>", "Brief the room", 0),
            Event::new("2", "Alarm", "<I>Sirens</I> sound", 30),
            Event::new("3", "Close", "", 90),
        ];
        timeline::build(&events, &Baseline::None)
    }

    fn table(doc: &Document) -> &Table {
        doc.tables().next().unwrap()
    }

    #[test]
    fn test_table_layout() {
        let config = ReportConfig::default();
        let doc = ReportAssembler::new(&config, Granularity::Hms).assemble(&entries(), Some("MEL"));

        assert!(matches!(&doc.blocks[0], Block::Heading { text } if text == "MEL"));
        let table = table(&doc);

        let header: Vec<String> = table.header.cells.iter().map(Cell::text).collect();
        assert_eq!(
            header,
            vec!["Cumulative Time", "Subject", "Text", "Inject Timing (s)"]
        );
        assert_eq!(table.header.shading.as_deref(), Some("BFBFBF"));
        assert!(table.header.cells.iter().all(|c| c.runs[0].bold));

        assert_eq!(table.rows.len(), 3);
        let times: Vec<String> = table.rows.iter().map(|r| r.cells[0].text()).collect();
        assert_eq!(times, vec!["00:00:00", "00:00:30", "00:02:00"]);
        assert_eq!(table.rows[2].cells[3].text(), "90");

        assert_eq!(table.rows[0].cells[1].runs, vec![StyledRun::bold("Start")]);
        assert_eq!(
            table.rows[1].cells[2].runs,
            vec![StyledRun::italic("Sirens"), StyledRun::plain(" sound")]
        );
    }

    #[test]
    fn test_alternating_shading() {
        let config = ReportConfig::default().with_row_shading("ABCDEF");
        let doc = ReportAssembler::new(&config, Granularity::Hms).assemble(&entries(), None);

        let shading: Vec<Option<&str>> = table(&doc)
            .rows
            .iter()
            .map(|r| r.shading.as_deref())
            .collect();
        assert_eq!(shading, vec![Some("ABCDEF"), None, Some("ABCDEF")]);
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let config = ReportConfig::default();
        let doc = ReportAssembler::new(&config, Granularity::Hms).assemble(&[], None);

        assert_eq!(doc.blocks.len(), 1);
        let table = table(&doc);
        assert_eq!(table.header.cells.len(), 4);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_paragraph_layout() {
        let config = ReportConfig::default().with_layout(ReportLayout::Paragraphs);
        let doc =
            ReportAssembler::new(&config, Granularity::DaysHms).assemble(&entries(), Some("MEL"));

        assert_eq!(doc.tables().count(), 0);
        assert_eq!(doc.blocks.len(), 4);
        assert_eq!(doc.entries().count(), 3);
        assert!(doc
            .entries()
            .all(|entry| entry[0].role == ParagraphRole::Time));

        let paragraphs: Vec<&Paragraph> = doc.paragraphs().collect();
        assert_eq!(paragraphs.len(), 9);

        let roles: Vec<ParagraphRole> = paragraphs[..3].iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![ParagraphRole::Time, ParagraphRole::Subject, ParagraphRole::Body]
        );
        assert_eq!(paragraphs[3].runs, vec![StyledRun::plain("0d 00:00:30")]);
        assert_eq!(paragraphs[1].runs, vec![StyledRun::bold("Start")]);
        assert!(paragraphs[8].runs.is_empty());
    }

    #[test]
    fn test_order_is_preserved_without_dedup() {
        let events = vec![
            Event::new("b", "Same", "x", 10),
            Event::new("a", "Same", "x", 5),
        ];
        let entries = timeline::build(&events, &Baseline::None);
        let config = ReportConfig::default();
        let doc = ReportAssembler::new(&config, Granularity::Hms).assemble(&entries, None);

        let inject: Vec<String> = table(&doc).rows.iter().map(|r| r.cells[3].text()).collect();
        assert_eq!(inject, vec!["10", "5"]);
    }
}
