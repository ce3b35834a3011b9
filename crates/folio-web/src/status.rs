#![forbid(unsafe_code)]

//! JSON status snapshot for JS callers.

use folio_core::{Controller, PageHost};
use serde::Serialize;

/// What `portfolioStatus()` reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStatus {
    pub wired: bool,
    pub active_section: Option<String>,
    pub header_offset: Option<f64>,
    /// Listener registrations the browser refused, as messages.
    pub failures: Vec<String>,
}

impl PortfolioStatus {
    /// Status before the page has been wired.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            wired: false,
            active_section: None,
            header_offset: None,
            failures: Vec::new(),
        }
    }

    #[must_use]
    pub fn of<H: PageHost>(controller: &Controller<H>) -> Self {
        Self {
            wired: true,
            active_section: controller.active_section(),
            header_offset: Some(controller.header_offset()),
            failures: controller.failures().iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
