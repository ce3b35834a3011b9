#![forbid(unsafe_code)]

//! Active navigation link highlighting.

use std::cell::RefCell;
use std::rc::Rc;

use crate::active::{ActiveRule, SectionOffset, resolve_active_section};
use crate::host::{PageElement, PageHost, WindowEvent};

use super::{Context, Failures, skipped};

/// Navigation links and the sections they point at.
pub struct Highlighter<H: PageHost> {
    ctx: Context<H>,
    links: Vec<H::Element>,
    sections: Vec<H::Element>,
    current: RefCell<Option<String>>,
}

impl<H: PageHost> Highlighter<H> {
    #[must_use]
    pub fn new(ctx: Context<H>, links: Vec<H::Element>, sections: Vec<H::Element>) -> Self {
        Self {
            ctx,
            links,
            sections,
            current: RefCell::new(None),
        }
    }

    /// Section offsets read from the live document.
    fn snapshot(&self) -> Vec<SectionOffset> {
        self.sections
            .iter()
            .map(|s| SectionOffset::new(s.id().unwrap_or_default(), s.offset_top()))
            .collect()
    }

    /// Recompute the active section and re-mark the links.
    ///
    /// Exactly one link (the first whose `href` is `#<id>`) is marked; with
    /// no resolved section or no matching link, none is.
    pub fn update(&self) -> Option<String> {
        let config = &self.ctx.config;
        let offsets = self.snapshot();
        let rule = ActiveRule {
            header_offset: self.ctx.header_offset.get(),
            bottom_tolerance: config.bottom_tolerance,
            home_id: &config.home_section_id,
        };
        let active = resolve_active_section(&offsets, self.ctx.host.scroll_metrics(), rule)
            .map(str::to_owned);

        let wanted = active.as_ref().map(|id| format!("#{id}"));
        let mut marked = false;
        for link in &self.links {
            link.remove_class(&config.active_class);
            if !marked && wanted.is_some() && link.attribute("href") == wanted {
                link.add_class(&config.active_class);
                marked = true;
            }
        }

        let mut current = self.current.borrow_mut();
        if *current != active {
            #[cfg(feature = "tracing")]
            tracing::debug!(section = ?active, "active section changed");
            current.clone_from(&active);
        }
        active
    }

    /// Section resolved by the last update.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }
}

/// Run once and on every scroll. Skipped when there are no links to mark.
pub fn wire<H: PageHost>(
    ctx: &Context<H>,
    links: Vec<H::Element>,
    failures: &mut Failures,
) -> Option<Rc<Highlighter<H>>> {
    if links.is_empty() {
        skipped("highlight", "navigation links");
        return None;
    }
    let sections = ctx.host.query_all(&ctx.config.section_selector);
    let highlighter = Rc::new(Highlighter::new(ctx.clone(), links, sections));
    highlighter.update();

    let handler = Rc::clone(&highlighter);
    failures.record(
        "highlight",
        ctx.host.on_window(
            WindowEvent::Scroll,
            Box::new(move || {
                handler.update();
            }),
        ),
    );
    Some(highlighter)
}
