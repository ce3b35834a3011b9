#![forbid(unsafe_code)]

//! Page configuration: selectors, class names and thresholds.
//!
//! Defaults describe the portfolio page markup. A host may override any
//! field from a JSON object with camelCase keys; missing keys keep their
//! defaults and unknown keys are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::error::WireError;

/// Selectors, class names and thresholds used by the controller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub nav_toggle_selector: String,
    pub nav_selector: String,
    pub nav_link_selector: String,
    pub header_selector: String,
    pub cta_selector: String,
    pub section_selector: String,
    pub scroll_top_id: String,
    pub project_toggle_selector: String,
    pub project_card_selector: String,
    pub detail_link_selector: String,
    pub year_id: String,
    /// Section forced active while scrolled above the first section.
    pub home_section_id: String,
    /// Visibility class for the navigation container and scroll-to-top control.
    pub show_class: String,
    pub active_class: String,
    pub expanded_class: String,
    /// Added to the header height to form the scroll clearance.
    pub header_margin: f64,
    /// Scroll-to-top control shows once `scrollY` exceeds this.
    pub scroll_top_threshold: f64,
    /// Bottom-of-page slack before the last section is forced active.
    pub bottom_tolerance: f64,
    /// Re-measure the header on window resize. Off: measured once at wiring.
    pub remeasure_header_on_resize: bool,
    /// Minimum level for host-side log output.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_toggle_selector: ".mobile-nav-toggle".into(),
            nav_selector: ".main-nav".into(),
            nav_link_selector: ".main-nav a".into(),
            header_selector: ".site-header".into(),
            cta_selector: ".hero-section .btn-primary".into(),
            section_selector: "section[id]".into(),
            scroll_top_id: "scrollToTopBtn".into(),
            project_toggle_selector: ".project-toggle".into(),
            project_card_selector: ".project-card".into(),
            detail_link_selector: ".project-details a".into(),
            year_id: "current-year".into(),
            home_section_id: "home".into(),
            show_class: "show".into(),
            active_class: "active".into(),
            expanded_class: "expanded".into(),
            header_margin: 10.0,
            scroll_top_threshold: 300.0,
            bottom_tolerance: 5.0,
            remeasure_header_on_resize: false,
            log_level: "info".into(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON options object.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Config`] if the text is not a JSON object of the
    /// expected shape.
    pub fn from_json_str(json: &str) -> Result<Self, WireError> {
        let value: Value =
            serde_json::from_str(json).map_err(|err| WireError::Config(err.to_string()))?;
        Self::from_json_value(value)
    }

    /// Build from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Config`] unless `value` is an object whose fields
    /// have the expected types.
    pub fn from_json_value(value: Value) -> Result<Self, WireError> {
        match value {
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|err| WireError::Config(err.to_string()))
            }
            other => Err(WireError::Config(format!(
                "options must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Attribute mirroring toggle state on controls.
    #[must_use]
    pub const fn expanded_attribute(&self) -> &'static str {
        "aria-expanded"
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
