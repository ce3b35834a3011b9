#![forbid(unsafe_code)]

//! Single wiring entry point.

use std::rc::Rc;

use crate::behavior::highlight::{self, Highlighter};
use crate::behavior::nav::{self, MobileNav};
use crate::behavior::scroll_top::{self, ScrollTop};
use crate::behavior::{Context, Failures, HeaderOffset, cards, copyright, smooth_scroll};
use crate::config::PageConfig;
use crate::error::WireError;
use crate::host::{PageHost, WindowEvent};

/// Handle to a wired page.
///
/// Dropping it does not detach anything: listeners live for the page.
pub struct Controller<H: PageHost> {
    ctx: Context<H>,
    highlighter: Option<Rc<Highlighter<H>>>,
    scroll_top: Option<Rc<ScrollTop<H>>>,
    failures: Vec<WireError>,
}

/// Wire every behavior against `host`.
///
/// Behaviors whose elements are missing are skipped. A listener the host
/// refuses is recorded in [`Controller::failures`] and the rest of the page
/// is still wired.
pub fn wire<H: PageHost>(host: H, config: PageConfig) -> Controller<H> {
    let host = Rc::new(host);
    let header = host.query(&config.header_selector);
    let ctx = Context {
        header_offset: HeaderOffset::new(HeaderOffset::measure(
            header.as_ref(),
            config.header_margin,
        )),
        host,
        config: Rc::new(config),
    };
    let mut failures = Failures::default();

    let menu = MobileNav::resolve(&*ctx.host, &ctx.config);
    nav::wire(&ctx, &menu, &mut failures);

    let links = ctx.host.query_all(&ctx.config.nav_link_selector);
    smooth_scroll::wire_nav_links(&ctx, &links, &menu, &mut failures);
    smooth_scroll::wire_cta(&ctx, &mut failures);

    let link_count = links.len();
    let highlighter = highlight::wire(&ctx, links, &mut failures);
    let scroll_top = scroll_top::wire(&ctx, &mut failures);
    let card_count = cards::wire(&ctx, &mut failures);
    copyright::apply(&ctx);

    if ctx.config.remeasure_header_on_resize {
        let offset = ctx.header_offset.clone();
        let margin = ctx.config.header_margin;
        failures.record(
            "header-resize",
            ctx.host.on_window(
                WindowEvent::Resize,
                Box::new(move || offset.set(HeaderOffset::measure(header.as_ref(), margin))),
            ),
        );
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        links = link_count,
        cards = card_count,
        header_offset = ctx.header_offset.get(),
        "page controller wired"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (link_count, card_count);

    Controller {
        ctx,
        highlighter,
        scroll_top,
        failures: failures.into_vec(),
    }
}

impl<H: PageHost> Controller<H> {
    /// Re-run the scroll-driven updates without a scroll event.
    pub fn refresh(&self) {
        if let Some(highlighter) = &self.highlighter {
            highlighter.update();
        }
        if let Some(control) = &self.scroll_top {
            control.update();
        }
    }

    /// Current header clearance in pixels.
    #[must_use]
    pub fn header_offset(&self) -> f64 {
        self.ctx.header_offset.get()
    }

    /// Section the highlighter last resolved.
    #[must_use]
    pub fn active_section(&self) -> Option<String> {
        self.highlighter.as_ref().and_then(|h| h.current())
    }

    /// Smooth-scroll to section `id` using the link offset rule.
    ///
    /// Returns `false` (and scrolls nowhere) if no element has that id.
    pub fn scroll_to_section(&self, id: &str) -> bool {
        match self.ctx.host.element_by_id(id) {
            Some(target) => {
                self.ctx.scroll_below_header(&target);
                true
            }
            None => false,
        }
    }

    /// Listeners the host refused while wiring.
    #[must_use]
    pub fn failures(&self) -> &[WireError] {
        &self.failures
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.ctx.host
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.ctx.config
    }
}
