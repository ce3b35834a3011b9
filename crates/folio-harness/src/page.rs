#![forbid(unsafe_code)]

//! In-memory page implementing the `folio-core` host traits.
//!
//! - **Click dispatch** bubbles from the target to the root, invoking
//!   listeners in registration order and honoring `stopPropagation`.
//! - **Scrolling** is host-driven: `scroll_to` requests are recorded, and the
//!   test moves the viewport with [`MemoryPage::scroll_y_to`], which fires
//!   scroll listeners like a browser would.
//! - **Failure injection**: [`MemoryPage::refuse_listeners`] makes every
//!   later registration fail.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::{
    Activation, ClickHandler, PageElement, PageHost, ScrollBehavior, ScrollMetrics, WindowEvent,
    WindowHandler, WireError,
};

use crate::dom::{Dom, NodeId};
use crate::selector::SelectorList;

/// A recorded `scroll_to` request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Result of a dispatched click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
    /// Listeners invoked, across all nodes on the path.
    pub listeners_run: usize,
}

#[derive(Default)]
struct ClickState {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Activation for ClickState {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

type SharedClick = Rc<RefCell<ClickHandler>>;
type SharedWindow = Rc<RefCell<WindowHandler>>;

struct PageState {
    dom: RefCell<Dom>,
    click_listeners: RefCell<HashMap<NodeId, Vec<SharedClick>>>,
    window_listeners: RefCell<Vec<(WindowEvent, SharedWindow)>>,
    metrics: Cell<ScrollMetrics>,
    year: Cell<i32>,
    scroll_log: RefCell<Vec<ScrollRequest>>,
    refuse_listeners: Cell<bool>,
}

/// Shared handle to an in-memory page. Clones refer to the same page.
#[derive(Clone)]
pub struct MemoryPage {
    state: Rc<PageState>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// Empty page: 800px viewport, 800px document, year 1970.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(PageState {
                dom: RefCell::new(Dom::new()),
                click_listeners: RefCell::new(HashMap::new()),
                window_listeners: RefCell::new(Vec::new()),
                metrics: Cell::new(ScrollMetrics {
                    scroll_y: 0.0,
                    viewport_height: 800.0,
                    document_height: 800.0,
                }),
                year: Cell::new(1970),
                scroll_log: RefCell::new(Vec::new()),
                refuse_listeners: Cell::new(false),
            }),
        }
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> MemoryElement {
        let root = self.state.dom.borrow().root();
        self.handle(root)
    }

    fn handle(&self, node: NodeId) -> MemoryElement {
        MemoryElement {
            page: self.clone(),
            node,
        }
    }

    /// Start building a `tag` element under `parent`.
    #[must_use]
    pub fn build(&self, parent: &MemoryElement, tag: &str) -> ElementBuilder {
        let node = self.state.dom.borrow_mut().append(parent.node, tag);
        ElementBuilder {
            element: self.handle(node),
        }
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.update_metrics(|m| m.viewport_height = height);
    }

    pub fn set_document_height(&self, height: f64) {
        self.update_metrics(|m| m.document_height = height);
    }

    /// Fix the host clock's year.
    pub fn set_year(&self, year: i32) {
        self.state.year.set(year);
    }

    /// Make every later listener registration fail.
    pub fn refuse_listeners(&self, refuse: bool) {
        self.state.refuse_listeners.set(refuse);
    }

    fn update_metrics(&self, f: impl FnOnce(&mut ScrollMetrics)) {
        let mut m = self.state.metrics.get();
        f(&mut m);
        self.state.metrics.set(m);
    }

    /// Move the viewport and fire scroll listeners.
    pub fn scroll_y_to(&self, y: f64) {
        self.update_metrics(|m| m.scroll_y = y);
        self.fire(WindowEvent::Scroll);
    }

    /// Fire listeners registered for `event`, in registration order.
    pub fn fire(&self, event: WindowEvent) {
        let handlers: Vec<SharedWindow> = self
            .state
            .window_listeners
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == event)
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            (*handler.borrow_mut())();
        }
    }

    /// Dispatch a click at `target`, bubbling to the root.
    pub fn click(&self, target: &MemoryElement) -> DispatchOutcome {
        let path = self.state.dom.borrow().ancestry(target.node);
        let mut state = ClickState::default();
        let mut listeners_run = 0;

        for node in path {
            let handlers: Vec<SharedClick> = self
                .state
                .click_listeners
                .borrow()
                .get(&node)
                .cloned()
                .unwrap_or_default();
            for handler in handlers {
                (*handler.borrow_mut())(&mut state as &mut dyn Activation);
                listeners_run += 1;
            }
            if state.propagation_stopped {
                break;
            }
        }

        DispatchOutcome {
            default_prevented: state.default_prevented,
            propagation_stopped: state.propagation_stopped,
            listeners_run,
        }
    }

    /// Attach an extra click listener, as other page scripts would.
    pub fn listen_click(&self, element: &MemoryElement, handler: ClickHandler) {
        self.state
            .click_listeners
            .borrow_mut()
            .entry(element.node)
            .or_default()
            .push(Rc::new(RefCell::new(handler)));
    }

    /// Scroll requests received so far, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.state.scroll_log.borrow().clone()
    }

    /// Number of window listeners registered for `event`.
    #[must_use]
    pub fn window_listener_count(&self, event: WindowEvent) -> usize {
        self.state
            .window_listeners
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == event)
            .count()
    }

    fn select(&self, selector: &str) -> Vec<NodeId> {
        match SelectorList::parse(selector) {
            Ok(list) => self.state.dom.borrow().select_all(&list),
            Err(_) => Vec::new(),
        }
    }

    fn refused(&self, event: &'static str) -> Result<(), WireError> {
        if self.state.refuse_listeners.get() {
            return Err(WireError::listener(event, "refused by test host"));
        }
        Ok(())
    }
}

impl PageHost for MemoryPage {
    type Element = MemoryElement;

    fn query(&self, selector: &str) -> Option<MemoryElement> {
        self.select(selector).first().map(|&n| self.handle(n))
    }

    fn query_all(&self, selector: &str) -> Vec<MemoryElement> {
        self.select(selector)
            .into_iter()
            .map(|n| self.handle(n))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let found = self.state.dom.borrow().find_by_id(id);
        found.map(|n| self.handle(n))
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.state.metrics.get()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.state
            .scroll_log
            .borrow_mut()
            .push(ScrollRequest { top, behavior });
    }

    fn current_year(&self) -> i32 {
        self.state.year.get()
    }

    fn on_click(&self, element: &MemoryElement, handler: ClickHandler) -> Result<(), WireError> {
        self.refused("click")?;
        self.listen_click(element, handler);
        Ok(())
    }

    fn on_window(&self, event: WindowEvent, handler: WindowHandler) -> Result<(), WireError> {
        self.refused(event.as_str())?;
        self.state
            .window_listeners
            .borrow_mut()
            .push((event, Rc::new(RefCell::new(handler))));
        Ok(())
    }
}

/// Handle to one element of a [`MemoryPage`].
#[derive(Clone)]
pub struct MemoryElement {
    page: MemoryPage,
    node: NodeId,
}

impl core::fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryElement")
            .field("node", &self.node)
            .field("tag", &self.tag())
            .finish()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.page.state, &other.page.state) && self.node == other.node
    }
}

impl MemoryElement {
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.page.state.dom.borrow().node(self.node).tag.clone()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.page.state.dom.borrow().node(self.node).text.clone()
    }

    /// Move the element (e.g. after a layout change).
    pub fn set_offset_top(&self, top: f64) {
        self.page.state.dom.borrow_mut().node_mut(self.node).offset_top = top;
    }

    pub fn set_offset_height(&self, height: f64) {
        self.page.state.dom.borrow_mut().node_mut(self.node).offset_height = height;
    }
}

impl PageElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.page.state.dom.borrow().attribute(self.node, name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.page
            .state
            .dom
            .borrow_mut()
            .set_attribute(self.node, name, value);
    }

    fn has_class(&self, class: &str) -> bool {
        self.page.state.dom.borrow().has_class(self.node, class)
    }

    fn add_class(&self, class: &str) {
        self.page.state.dom.borrow_mut().add_class(self.node, class);
    }

    fn remove_class(&self, class: &str) {
        self.page.state.dom.borrow_mut().remove_class(self.node, class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        let mut dom = self.page.state.dom.borrow_mut();
        if dom.has_class(self.node, class) {
            dom.remove_class(self.node, class);
            false
        } else {
            dom.add_class(self.node, class);
            true
        }
    }

    fn offset_top(&self) -> f64 {
        self.page.state.dom.borrow().node(self.node).offset_top
    }

    fn offset_height(&self) -> f64 {
        self.page.state.dom.borrow().node(self.node).offset_height
    }

    fn set_text(&self, text: &str) {
        self.page.state.dom.borrow_mut().node_mut(self.node).text = text.to_string();
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        let list = SelectorList::parse(selector).ok()?;
        let found = self.page.state.dom.borrow().closest(self.node, &list);
        found.map(|n| self.page.handle(n))
    }
}

/// Fluent element construction.
#[must_use]
pub struct ElementBuilder {
    element: MemoryElement,
}

impl ElementBuilder {
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.element.add_class(class);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.element.set_attribute(name, value);
        self
    }

    pub fn top(self, top: f64) -> Self {
        self.element.set_offset_top(top);
        self
    }

    pub fn height(self, height: f64) -> Self {
        self.element.set_offset_height(height);
        self
    }

    pub fn finish(self) -> MemoryElement {
        self.element
    }
}
