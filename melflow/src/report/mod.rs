//! Report assembly.
//!
//! This module provides:
//! - The document model (tables, paragraphs, styled runs)
//! - The assembler turning timeline entries into a document
//! - The writer seam for external exporters

mod assembler;
mod document;
mod writer;

pub use assembler::ReportAssembler;
pub use document::{Block, Cell, Document, Paragraph, ParagraphRole, Row, Table};
pub use writer::{JsonReportWriter, ReportWriter};
