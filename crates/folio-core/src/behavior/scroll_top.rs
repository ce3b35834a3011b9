#![forbid(unsafe_code)]

//! Scroll-to-top control.

use std::rc::Rc;

use crate::host::{Activation, PageElement, PageHost, ScrollBehavior, WindowEvent};

use super::{Context, Failures, skipped};

/// The scroll-to-top control, shown past a fixed scroll threshold.
pub struct ScrollTop<H: PageHost> {
    ctx: Context<H>,
    button: H::Element,
}

impl<H: PageHost> ScrollTop<H> {
    #[must_use]
    pub fn new(ctx: Context<H>, button: H::Element) -> Self {
        Self { ctx, button }
    }

    /// Show the control iff `scrollY` is strictly past the threshold.
    pub fn update(&self) -> bool {
        let config = &self.ctx.config;
        let visible = self.ctx.host.scroll_metrics().scroll_y > config.scroll_top_threshold;
        if visible {
            self.button.add_class(&config.show_class);
        } else {
            self.button.remove_class(&config.show_class);
        }
        visible
    }

    pub fn scroll_to_top(&self) {
        self.ctx.host.scroll_to(0.0, ScrollBehavior::Smooth);
    }
}

/// Attach the scroll and click handlers, if the control exists.
pub fn wire<H: PageHost>(ctx: &Context<H>, failures: &mut Failures) -> Option<Rc<ScrollTop<H>>> {
    let Some(button) = ctx.host.element_by_id(&ctx.config.scroll_top_id) else {
        skipped("scroll-top", "scroll-to-top control");
        return None;
    };
    let control = Rc::new(ScrollTop::new(ctx.clone(), button.clone()));

    let on_scroll = Rc::clone(&control);
    failures.record(
        "scroll-top",
        ctx.host.on_window(
            WindowEvent::Scroll,
            Box::new(move || {
                on_scroll.update();
            }),
        ),
    );

    let on_click = Rc::clone(&control);
    failures.record(
        "scroll-top",
        ctx.host.on_click(
            &button,
            Box::new(move |_: &mut dyn Activation| on_click.scroll_to_top()),
        ),
    );
    Some(control)
}
