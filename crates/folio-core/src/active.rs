#![forbid(unsafe_code)]

//! Active-section resolution.
//!
//! Pure function over a snapshot of section offsets and the viewport, so
//! the highlighting rules can be tested without any host.

use crate::host::ScrollMetrics;

/// Snapshot of one section's id and offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// Parameters of the highlighting rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRule<'a> {
    /// Header clearance subtracted from every section offset.
    pub header_offset: f64,
    /// Slack at the bottom of the page before the last section is forced.
    pub bottom_tolerance: f64,
    /// Id reported while scrolled above the first section.
    pub home_id: &'a str,
}

/// Id of the section the viewport is currently in.
///
/// The deepest section whose adjusted offset has been scrolled past wins.
/// Above the first section the home id is reported; within
/// `bottom_tolerance` of the document end the last section is reported even
/// if its own offset was never reached. With no sections, `None`.
#[must_use]
pub fn resolve_active_section<'a>(
    sections: &'a [SectionOffset],
    metrics: ScrollMetrics,
    rule: ActiveRule<'a>,
) -> Option<&'a str> {
    let (first, last) = (sections.first()?, sections.last()?);
    let scroll_y = metrics.scroll_y;

    let mut current = sections
        .iter()
        .filter(|s| scroll_y >= s.top - rule.header_offset)
        .last()
        .map(|s| s.id.as_str());

    if scroll_y < first.top - rule.header_offset {
        current = Some(rule.home_id);
    }

    if metrics.viewport_height + scroll_y >= metrics.document_height - rule.bottom_tolerance {
        current = Some(last.id.as_str());
    }

    current
}
