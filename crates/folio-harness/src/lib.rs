#![forbid(unsafe_code)]

//! Deterministic in-memory page host for testing Folio without a browser.
//!
//! - **Document**: an arena element tree ([`dom::Dom`]) with a small
//!   selector subset ([`selector`]) and test-assigned layout offsets.
//! - **Host**: [`MemoryPage`] implements `folio_core::PageHost`; clicks
//!   bubble with `stopPropagation` support, scrolling is driven by the test.
//! - **Fixture**: [`fixture::portfolio`] builds the standard portfolio page.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_harness::fixture;
//!
//! let site = fixture::portfolio();
//! let controller = folio_core::wire(site.page.clone(), Default::default());
//! site.page.scroll_y_to(900.0);
//! assert_eq!(controller.active_section().as_deref(), Some("about"));
//! ```

pub mod dom;
pub mod fixture;
pub mod page;
pub mod selector;

pub use page::{DispatchOutcome, ElementBuilder, MemoryElement, MemoryPage, ScrollRequest};
