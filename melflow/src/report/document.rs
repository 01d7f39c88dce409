//! Document model handed to external exporters.

use crate::markup::{self, StyledRun};
use serde::{Deserialize, Serialize};

/// A table cell made of styled runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Runs in reading order.
    pub runs: Vec<StyledRun>,
}

impl Cell {
    /// A cell holding unstyled text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![StyledRun::plain(text)],
        }
    }

    /// A cell holding bold text.
    #[must_use]
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            runs: vec![StyledRun::bold(text)],
        }
    }

    /// A cell rendered from inline markup.
    #[must_use]
    pub fn markup(text: &str) -> Self {
        Self {
            runs: markup::render(text),
        }
    }

    /// The cell's text without styling.
    #[must_use]
    pub fn text(&self) -> String {
        markup::plain_text(&self.runs)
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cells in column order.
    pub cells: Vec<Cell>,
    /// Background fill (hex RGB), if shaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading: Option<String>,
}

/// A table with one header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header row.
    pub header: Row,
    /// Data rows in input order.
    pub rows: Vec<Row>,
}

/// What a paragraph holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphRole {
    /// Cumulative time line.
    Time,
    /// Rendered subject.
    Subject,
    /// Rendered body text.
    Body,
}

/// A paragraph of styled runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// What the paragraph holds.
    pub role: ParagraphRole,
    /// Runs in reading order.
    pub runs: Vec<StyledRun>,
}

/// A top-level document block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading line.
    Heading {
        /// Heading text.
        text: String,
    },
    /// A table.
    Table(Table),
    /// One timeline entry: time, subject, and body paragraphs.
    Entry {
        /// Paragraphs in reading order.
        paragraphs: [Paragraph; 3],
    },
}

/// An assembled report, ready for serialization by an exporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Report title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Blocks in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Returns the tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Returns the entry blocks in document order.
    pub fn entries(&self) -> impl Iterator<Item = &[Paragraph; 3]> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Entry { paragraphs } => Some(paragraphs),
            _ => None,
        })
    }

    /// Returns every entry paragraph in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.entries().flat_map(|paragraphs| paragraphs.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_cell() {
        let cell = Cell::markup("<B>Go</B> now");
        assert_eq!(cell.runs.len(), 2);
        assert_eq!(cell.text(), "Go now");
    }

    #[test]
    fn test_block_serialization() {
        let doc = Document {
            title: Some("MEL".to_string()),
            blocks: vec![
                Block::Heading {
                    text: "MEL".to_string(),
                },
                Block::Entry {
                    paragraphs: [
                        Paragraph {
                            role: ParagraphRole::Time,
                            runs: vec![StyledRun::plain("00:00:00")],
                        },
                        Paragraph {
                            role: ParagraphRole::Subject,
                            runs: vec![StyledRun::bold("Alarm")],
                        },
                        Paragraph {
                            role: ParagraphRole::Body,
                            runs: Vec::new(),
                        },
                    ],
                },
            ],
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["blocks"][0]["type"], "heading");
        assert_eq!(json["blocks"][1]["type"], "entry");
        assert_eq!(json["blocks"][1]["paragraphs"][0]["role"], "time");
        assert_eq!(doc.paragraphs().count(), 3);

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_unshaded_row_omits_shading() {
        let json = serde_json::to_value(Row::default()).unwrap();
        assert!(json.get("shading").is_none());
    }
}
