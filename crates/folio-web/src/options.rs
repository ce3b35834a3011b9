#![forbid(unsafe_code)]

//! JS options → [`PageConfig`].
//!
//! The JS side hands over `JSON.stringify(options)`. Absent, `null` and
//! `undefined` options all mean "defaults".

use folio_core::{PageConfig, WireError};
use serde_json::Value;

/// Parse the stringified options object.
///
/// # Errors
///
/// Returns [`WireError::Config`] for invalid JSON, a non-object value, or a
/// field of the wrong type.
pub fn parse_options(json: Option<&str>) -> Result<PageConfig, WireError> {
    let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(PageConfig::default());
    };
    let value: Value =
        serde_json::from_str(json).map_err(|err| WireError::Config(err.to_string()))?;
    if value.is_null() {
        return Ok(PageConfig::default());
    }
    PageConfig::from_json_value(value)
}

/// Options for an `initPortfolio` call, or `None` if the page is already
/// wired (or waiting to be), in which case `json` is never looked at.
///
/// # Errors
///
/// Same as [`parse_options`], for a first call only.
pub fn options_for_init(
    already_started: bool,
    json: Option<&str>,
) -> Result<Option<PageConfig>, WireError> {
    if already_started {
        return Ok(None);
    }
    parse_options(json).map(Some)
}
