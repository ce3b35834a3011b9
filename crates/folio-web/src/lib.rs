#![forbid(unsafe_code)]

//! WASM frontend for Folio.
//!
//! Binds the `folio-core` page controller to the browser:
//! - [`dom`] implements the host traits over `web-sys`,
//! - `initPortfolio(options?)` wires the page once the markup is parsed,
//! - `refreshPortfolio()`, `scrollToSection(id)` and `portfolioStatus()`
//!   expose the wired controller,
//! - [`logging`] routes controller logs to the browser console.
//!
//! Option parsing and the status snapshot are plain Rust and build on every
//! target; the DOM bindings only exist on wasm32.

pub mod options;
pub mod status;

#[cfg(feature = "tracing")]
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomElement, DomHost};
#[cfg(target_arch = "wasm32")]
pub use wasm::{init_portfolio, portfolio_status, refresh_portfolio, scroll_to_section};

pub use options::parse_options;
pub use status::PortfolioStatus;

/// Crate version, as exposed to JS.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen::prelude::wasm_bindgen)]
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Whether a `document.readyState` value means the markup is still parsing.
#[must_use]
pub fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}
