//! Inline markup rendering.
//!
//! Body text may carry two tag pairs, `<B>…</B>` and `<I>…</I>`. They do not
//! nest and cannot be escaped. An opening tag without its closer styles
//! everything to the end of the text. Any other `<…>` sequence is plain text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A span of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    /// The text.
    pub content: String,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

impl StyledRun {
    /// An unstyled run.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: false,
            italic: false,
        }
    }

    /// A bold run.
    #[must_use]
    pub fn bold(content: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(content)
        }
    }

    /// An italic run.
    #[must_use]
    pub fn italic(content: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(content)
        }
    }

    /// Returns true if the run carries no styling.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        !self.bold && !self.italic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bold,
    Italic,
}

impl Style {
    fn from_tag(tag: &str) -> Self {
        if tag == "<I>" {
            Self::Italic
        } else {
            Self::Bold
        }
    }

    const fn closing(self) -> &'static str {
        match self {
            Self::Bold => "</B>",
            Self::Italic => "</I>",
        }
    }

    fn run(self, content: &str) -> StyledRun {
        match self {
            Self::Bold => StyledRun::bold(content),
            Self::Italic => StyledRun::italic(content),
        }
    }
}

#[allow(clippy::expect_used)]
static OPENING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[BI]>").expect("opening tag pattern is valid"));

/// A styled span located but not yet emitted.
#[derive(Debug, Clone, Copy)]
struct Pending {
    style: Style,
    start: usize,
    end: usize,
    resume: usize,
}

/// Iterator over the styled runs of a text.
///
/// State is the scan position plus at most one located styled span.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    text: &'a str,
    cursor: usize,
    pending: Option<Pending>,
}

impl<'a> Runs<'a> {
    /// Starts scanning a text.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            cursor: 0,
            pending: None,
        }
    }

    fn locate(&self, style: Style, body_start: usize) -> Pending {
        let closing = style.closing();
        match self.text[body_start..].find(closing) {
            Some(offset) => Pending {
                style,
                start: body_start,
                end: body_start + offset,
                resume: body_start + offset + closing.len(),
            },
            None => Pending {
                style,
                start: body_start,
                end: self.text.len(),
                resume: self.text.len(),
            },
        }
    }
}

impl Iterator for Runs<'_> {
    type Item = StyledRun;

    fn next(&mut self) -> Option<StyledRun> {
        loop {
            if let Some(pending) = self.pending.take() {
                self.cursor = pending.resume;
                if pending.start < pending.end {
                    return Some(pending.style.run(&self.text[pending.start..pending.end]));
                }
                continue;
            }

            if self.cursor >= self.text.len() {
                return None;
            }

            let Some(tag) = OPENING_TAG.find_at(self.text, self.cursor) else {
                let rest = &self.text[self.cursor..];
                self.cursor = self.text.len();
                return Some(StyledRun::plain(rest));
            };

            let style = Style::from_tag(tag.as_str());
            self.pending = Some(self.locate(style, tag.end()));

            let before = &self.text[self.cursor..tag.start()];
            self.cursor = tag.start();
            if !before.is_empty() {
                return Some(StyledRun::plain(before));
            }
        }
    }
}

/// Renders inline-tagged text into styled runs.
#[must_use]
pub fn render(text: &str) -> Vec<StyledRun> {
    Runs::new(text).collect()
}

/// Concatenates the content of runs, dropping styling.
#[must_use]
pub fn plain_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.content.as_str()).collect()
}
