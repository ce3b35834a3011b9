#![forbid(unsafe_code)]

//! `web-sys` implementation of the `folio-core` host traits.

use folio_core::{
    Activation, ClickHandler, PageElement, PageHost, ScrollBehavior, ScrollMetrics, WindowEvent,
    WindowHandler, WireError,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, ScrollToOptions, Window};

/// Readable description of a thrown JS value.
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Log and drop a failed DOM mutation.
fn ignore(op: &'static str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        #[cfg(feature = "tracing")]
        tracing::debug!(op, err = %describe(&err), "dom mutation failed");
        #[cfg(not(feature = "tracing"))]
        let _ = (op, err);
    }
}

/// The live browser page.
#[derive(Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    /// # Errors
    ///
    /// Returns [`WireError::NoDocument`] if the window has no document.
    pub fn from_window(window: Window) -> Result<Self, WireError> {
        let document = window.document().ok_or(WireError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Whether the markup is still being parsed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        crate::is_loading_state(&self.document.ready_state())
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// A live DOM element.
#[derive(Debug, Clone)]
pub struct DomElement(Element);

impl DomElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl PageElement for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        ignore("set_attribute", self.0.set_attribute(name, value));
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        ignore("add_class", self.0.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        ignore("remove_class", self.0.class_list().remove_1(class));
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.0.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                ignore("toggle_class", Err(err));
                self.has_class(class)
            }
        }
    }

    fn offset_top(&self) -> f64 {
        self.html().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self) -> f64 {
        self.html().map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0.closest(selector).ok().flatten().map(DomElement)
    }
}

struct DomActivation<'a>(&'a Event);

impl Activation for DomActivation<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&mut self) {
        self.0.stop_propagation();
    }
}

impl PageHost for DomHost {
    type Element = DomElement;

    fn query(&self, selector: &str) -> Option<DomElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(DomElement)
    }

    fn query_all(&self, selector: &str) -> Vec<DomElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomElement)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.document.get_element_by_id(id).map(DomElement)
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            viewport_height: self
                .window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
            document_height: self
                .document
                .body()
                .map_or(0.0, |body| f64::from(body.offset_height())),
        }
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }

    fn on_click(&self, element: &DomElement, mut handler: ClickHandler) -> Result<(), WireError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            handler(&mut DomActivation(&event));
        });
        element
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|err| WireError::listener("click", describe(&err)))?;
        // Page-lifetime listener.
        closure.forget();
        Ok(())
    }

    fn on_window(&self, event: WindowEvent, mut handler: WindowHandler) -> Result<(), WireError> {
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        self.window
            .add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
            .map_err(|err| WireError::listener(event.as_str(), describe(&err)))?;
        closure.forget();
        Ok(())
    }
}
