#![forbid(unsafe_code)]

//! Project card expand/collapse.
//!
//! Each toggle flips the card that encloses it; cards are independent of
//! each other. Links inside a card's details stop propagation so following
//! one never reaches a toggle handler further up the tree.

use crate::config::PageConfig;
use crate::host::{Activation, PageElement, PageHost};

use super::{Context, Failures, skipped};

/// Flip the card enclosing `toggle` and mirror the state on the toggle.
///
/// Returns the card's new state, or `None` when `toggle` has no enclosing
/// card.
pub fn toggle_card<E: PageElement>(toggle: &E, config: &PageConfig) -> Option<bool> {
    let card = toggle.closest(&config.project_card_selector)?;
    let expanded = card.toggle_class(&config.expanded_class);
    toggle.set_attribute(
        config.expanded_attribute(),
        if expanded { "true" } else { "false" },
    );
    Some(expanded)
}

/// Attach a handler to every project toggle and every detail link.
pub fn wire<H: PageHost>(ctx: &Context<H>, failures: &mut Failures) -> usize {
    let toggles = ctx.host.query_all(&ctx.config.project_toggle_selector);
    if toggles.is_empty() {
        skipped("cards", "project toggles");
    }
    for toggle in &toggles {
        let config = ctx.config.clone();
        let handler_toggle = toggle.clone();
        failures.record(
            "project-toggle",
            ctx.host.on_click(
                toggle,
                Box::new(move |_: &mut dyn Activation| {
                    toggle_card(&handler_toggle, &config);
                }),
            ),
        );
    }

    for link in ctx.host.query_all(&ctx.config.detail_link_selector) {
        failures.record(
            "detail-link",
            ctx.host.on_click(
                &link,
                Box::new(|event: &mut dyn Activation| event.stop_propagation()),
            ),
        );
    }
    toggles.len()
}
