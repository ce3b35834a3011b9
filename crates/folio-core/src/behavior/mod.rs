#![forbid(unsafe_code)]

//! The independent page behaviors.
//!
//! Each behavior resolves the elements it needs once, skips itself when any
//! is missing, and attaches its listeners. Handlers close over a shared
//! [`Context`] and their own element handles only.

pub mod cards;
pub mod copyright;
pub mod highlight;
pub mod nav;
pub mod scroll_top;
pub mod smooth_scroll;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::error::WireError;
use crate::host::{PageElement, PageHost, ScrollBehavior};

/// Header clearance shared by every scroll computation.
///
/// Measured once at wiring; only re-measured when the page opts in to
/// resize tracking.
#[derive(Debug, Clone, Default)]
pub struct HeaderOffset(Rc<Cell<f64>>);

impl HeaderOffset {
    /// `header.offsetHeight + margin`, or just `margin` without a header.
    #[must_use]
    pub fn measure<E: PageElement>(header: Option<&E>, margin: f64) -> f64 {
        header.map_or(0.0, PageElement::offset_height) + margin
    }

    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    #[must_use]
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    pub fn set(&self, value: f64) {
        self.0.set(value);
    }
}

/// Everything a handler may need besides its own elements.
pub struct Context<H: PageHost> {
    pub host: Rc<H>,
    pub config: Rc<PageConfig>,
    pub header_offset: HeaderOffset,
}

impl<H: PageHost> Clone for Context<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            config: Rc::clone(&self.config),
            header_offset: self.header_offset.clone(),
        }
    }
}

impl<H: PageHost> Context<H> {
    /// Smooth-scroll so `target` sits just below the header.
    pub fn scroll_below_header(&self, target: &H::Element) {
        let top = target.offset_top() - self.header_offset.get();
        #[cfg(feature = "tracing")]
        tracing::debug!(top, "smooth scroll requested");
        self.host.scroll_to(top, ScrollBehavior::Smooth);
    }
}

/// Collects listener failures without aborting the remaining wiring.
#[derive(Debug, Default)]
pub struct Failures(Vec<WireError>);

impl Failures {
    pub fn record(&mut self, role: &'static str, result: Result<(), WireError>) {
        if let Err(err) = result {
            let err = err.with_role(role);
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "listener not attached");
            self.0.push(err);
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<WireError> {
        self.0
    }
}

/// Log that a behavior was skipped because `role` is missing.
#[inline]
pub(crate) fn skipped(behavior: &'static str, role: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(behavior, role, "element missing, behavior skipped");
    #[cfg(not(feature = "tracing"))]
    let _ = (behavior, role);
}
