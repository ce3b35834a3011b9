#![forbid(unsafe_code)]

//! Mobile navigation toggle.

use crate::config::PageConfig;
use crate::host::{Activation, PageElement, PageHost};

use super::{Context, Failures, skipped};

/// The mobile navigation toggle and the container it shows.
///
/// Either may be missing. Toggling needs both; closing needs the container.
#[derive(Debug, Clone)]
pub struct MobileNav<E> {
    pub toggle: Option<E>,
    pub nav: Option<E>,
}

impl<E: PageElement> MobileNav<E> {
    pub fn resolve<H: PageHost<Element = E>>(host: &H, config: &PageConfig) -> Self {
        Self {
            toggle: host.query(&config.nav_toggle_selector),
            nav: host.query(&config.nav_selector),
        }
    }

    /// Whether the container currently carries the visibility class.
    #[must_use]
    pub fn is_open(&self, config: &PageConfig) -> bool {
        self.nav
            .as_ref()
            .is_some_and(|nav| nav.has_class(&config.show_class))
    }

    /// Flip the expanded state. Returns the new state, or `None` when either
    /// element is missing.
    pub fn toggle(&self, config: &PageConfig) -> Option<bool> {
        let (toggle, nav) = (self.toggle.as_ref()?, self.nav.as_ref()?);
        let attr = config.expanded_attribute();
        let expanded = toggle.attribute(attr).as_deref() != Some("true");
        toggle.set_attribute(attr, if expanded { "true" } else { "false" });
        nav.toggle_class(&config.show_class);
        Some(expanded)
    }

    /// Collapse the menu if it is open.
    pub fn close(&self, config: &PageConfig) {
        if !self.is_open(config) {
            return;
        }
        if let Some(toggle) = &self.toggle {
            toggle.set_attribute(config.expanded_attribute(), "false");
        }
        if let Some(nav) = &self.nav {
            nav.remove_class(&config.show_class);
        }
    }
}

/// Attach the toggle's click handler.
pub fn wire<H: PageHost>(ctx: &Context<H>, menu: &MobileNav<H::Element>, failures: &mut Failures) {
    let (Some(toggle), Some(_)) = (&menu.toggle, &menu.nav) else {
        skipped("nav-toggle", "toggle or navigation");
        return;
    };

    let config = ctx.config.clone();
    let handler_menu = menu.clone();
    failures.record(
        "nav-toggle",
        ctx.host.on_click(
            toggle,
            Box::new(move |_: &mut dyn Activation| {
                handler_menu.toggle(&config);
            }),
        ),
    );
}
