#![forbid(unsafe_code)]

//! Host capabilities consumed by the controller.
//!
//! The controller never touches a concrete DOM. Everything it needs is
//! reached through two traits:
//!
//! - [`PageHost`]: document queries, viewport metrics, scroll requests, the
//!   clock and listener registration.
//! - [`PageElement`]: the handful of element operations the behaviors use
//!   (attributes, classes, offsets, text, ancestor search).
//!
//! `folio-web` implements both over `web-sys`; `folio-harness` implements
//! them over an in-memory document for tests.

use crate::error::WireError;

/// Scroll animation requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Native smooth scrolling.
    Smooth,
    /// Jump immediately.
    Instant,
}

/// Window-level events the controller listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    Scroll,
    Resize,
}

impl WindowEvent {
    /// DOM event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        }
    }
}

/// Viewport snapshot taken once per scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset (`window.scrollY`).
    pub scroll_y: f64,
    /// Viewport height (`window.innerHeight`).
    pub viewport_height: f64,
    /// Total document height (`document.body.offsetHeight`).
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Distance between the viewport's bottom edge and the document's.
    #[must_use]
    pub fn distance_to_bottom(&self) -> f64 {
        self.document_height - (self.viewport_height + self.scroll_y)
    }
}

/// A click/activation event as seen by a handler.
pub trait Activation {
    /// Suppress the host's default action (e.g. fragment navigation).
    fn prevent_default(&mut self);

    /// Stop the event from reaching listeners on enclosing elements.
    fn stop_propagation(&mut self);
}

/// Handler invoked on element activation.
pub type ClickHandler = Box<dyn FnMut(&mut dyn Activation)>;

/// Handler invoked on a window event.
pub type WindowHandler = Box<dyn FnMut()>;

/// Element operations used by the behaviors.
///
/// Handles are cheap to clone and refer to the live element. Mutators are
/// infallible: a host that cannot apply one drops it.
pub trait PageElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;

    /// Vertical offset from the page top, in pixels.
    fn offset_top(&self) -> f64;

    /// Rendered height, in pixels.
    fn offset_height(&self) -> f64;

    /// Replace the element's text content.
    fn set_text(&self, text: &str);

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, selector: &str) -> Option<Self>;

    fn id(&self) -> Option<String> {
        self.attribute("id")
    }
}

/// Document, window and clock capabilities.
pub trait PageHost: 'static {
    type Element: PageElement;

    /// First element matching `selector`, in document order.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Request a scroll of the window to vertical offset `top`.
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// Current calendar year from the host clock.
    fn current_year(&self) -> i32;

    /// Attach a click listener to `element` for the page lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Listener`] if the host refuses the listener.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), WireError>;

    /// Attach a window listener for the page lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Listener`] if the host refuses the listener.
    fn on_window(&self, event: WindowEvent, handler: WindowHandler) -> Result<(), WireError>;
}

/// Resolve an `href` of the form `#<id>` to its target element.
///
/// Anything that is not a non-empty fragment resolves to `None`.
pub fn fragment_target<H: PageHost>(host: &H, href: Option<&str>) -> Option<H::Element> {
    let id = href?.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    host.element_by_id(id)
}
