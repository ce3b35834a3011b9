#![forbid(unsafe_code)]

//! Footer copyright year.

use crate::host::{PageElement, PageHost};

use super::{Context, skipped};

/// Write the host's current year into the year element, once.
pub fn apply<H: PageHost>(ctx: &Context<H>) -> Option<i32> {
    let Some(span) = ctx.host.element_by_id(&ctx.config.year_id) else {
        skipped("copyright", "year element");
        return None;
    };
    let year = ctx.host.current_year();
    span.set_text(&year.to_string());
    Some(year)
}
