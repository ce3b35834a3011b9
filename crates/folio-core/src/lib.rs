#![forbid(unsafe_code)]

//! Core: page interaction controller for the Folio portfolio site.
//!
//! Wires a handful of independent behaviors against an already-parsed page:
//!
//! - mobile navigation toggle,
//! - smooth scrolling for navigation links and the hero call-to-action,
//! - active navigation link highlighting on scroll,
//! - a scroll-to-top control,
//! - project card expand/collapse,
//! - the footer copyright year.
//!
//! The crate is host-agnostic. The page is reached only through the
//! [`PageHost`] and [`PageElement`] traits; `folio-web` binds them to the
//! browser DOM and `folio-harness` to an in-memory document.
//!
//! ```ignore
//! let controller = folio_core::wire(host, PageConfig::default());
//! controller.refresh();
//! ```

pub mod active;
pub mod behavior;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;

pub use active::{ActiveRule, SectionOffset, resolve_active_section};
pub use config::PageConfig;
pub use controller::{Controller, wire};
pub use error::WireError;
pub use host::{
    Activation, ClickHandler, PageElement, PageHost, ScrollBehavior, ScrollMetrics, WindowEvent,
    WindowHandler, fragment_target,
};
