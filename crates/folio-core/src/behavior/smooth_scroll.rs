#![forbid(unsafe_code)]

//! Smooth scrolling for navigation links and the hero call-to-action.
//!
//! Both suppress the default fragment jump and scroll so the target lands
//! just below the header. Navigation links also collapse the mobile menu.
//! A fragment with no matching element scrolls nowhere.

use crate::host::{Activation, PageElement, PageHost, fragment_target};

use super::nav::MobileNav;
use super::{Context, Failures, skipped};

/// Scroll to the target of `link`'s `href`, if it exists.
///
/// Returns whether a scroll was requested.
pub fn follow<H: PageHost>(ctx: &Context<H>, link: &H::Element) -> bool {
    let href = link.attribute("href");
    match fragment_target(&*ctx.host, href.as_deref()) {
        Some(target) => {
            ctx.scroll_below_header(&target);
            true
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(href = ?href, "fragment target not found");
            false
        }
    }
}

/// Attach handlers to every navigation link.
pub fn wire_nav_links<H: PageHost>(
    ctx: &Context<H>,
    links: &[H::Element],
    menu: &MobileNav<H::Element>,
    failures: &mut Failures,
) {
    for link in links {
        let handler_ctx = ctx.clone();
        let handler_link = link.clone();
        let handler_menu = menu.clone();
        failures.record(
            "nav-link",
            ctx.host.on_click(
                link,
                Box::new(move |event: &mut dyn Activation| {
                    event.prevent_default();
                    follow(&handler_ctx, &handler_link);
                    handler_menu.close(&handler_ctx.config);
                }),
            ),
        );
    }
}

/// Attach the call-to-action handler, if the button exists.
pub fn wire_cta<H: PageHost>(ctx: &Context<H>, failures: &mut Failures) {
    let Some(button) = ctx.host.query(&ctx.config.cta_selector) else {
        skipped("cta", "call-to-action button");
        return;
    };

    let handler_ctx = ctx.clone();
    let handler_button = button.clone();
    failures.record(
        "cta",
        ctx.host.on_click(
            &button,
            Box::new(move |event: &mut dyn Activation| {
                event.prevent_default();
                follow(&handler_ctx, &handler_button);
            }),
        ),
    );
}
