#![forbid(unsafe_code)]

//! A ready-made portfolio page matching the default `PageConfig`.
//!
//! Layout (header 70px, so the header offset is 80px):
//!
//! | section    | top  | height |
//! |------------|------|--------|
//! | `home`     | 0    | 600    |
//! | `about`    | 600  | 700    |
//! | `projects` | 1300 | 900    |
//! | `contact`  | 2200 | 400    |
//!
//! Viewport 800px, document 2600px, clock year 2031.

use crate::page::{MemoryElement, MemoryPage};

pub const HEADER_HEIGHT: f64 = 70.0;
pub const VIEWPORT_HEIGHT: f64 = 800.0;
pub const DOCUMENT_HEIGHT: f64 = 2600.0;
pub const YEAR: i32 = 2031;

/// Section ids and offsets, in document order.
pub const SECTIONS: [(&str, f64, f64); 4] = [
    ("home", 0.0, 600.0),
    ("about", 600.0, 700.0),
    ("projects", 1300.0, 900.0),
    ("contact", 2200.0, 400.0),
];

/// One project card with its toggle and a link in its details.
#[derive(Debug, Clone)]
pub struct CardParts {
    pub card: MemoryElement,
    pub toggle: MemoryElement,
    pub details: MemoryElement,
    pub detail_link: MemoryElement,
}

/// Handles to every role on the fixture page.
#[derive(Clone)]
pub struct Portfolio {
    pub page: MemoryPage,
    pub header: MemoryElement,
    pub nav_toggle: MemoryElement,
    pub nav: MemoryElement,
    /// One link per section, same order as [`SECTIONS`].
    pub links: Vec<MemoryElement>,
    pub cta: MemoryElement,
    pub sections: Vec<MemoryElement>,
    pub scroll_top: MemoryElement,
    pub cards: Vec<CardParts>,
    pub year: MemoryElement,
}

impl Portfolio {
    /// Link whose `href` targets section `id`.
    #[must_use]
    pub fn link(&self, id: &str) -> &MemoryElement {
        let index = SECTIONS
            .iter()
            .position(|(section, _, _)| *section == id)
            .unwrap_or_else(|| panic!("fixture has no section {id:?}"));
        &self.links[index]
    }
}

/// Build the full fixture page.
#[must_use]
pub fn portfolio() -> Portfolio {
    let page = MemoryPage::new();
    page.set_viewport_height(VIEWPORT_HEIGHT);
    page.set_document_height(DOCUMENT_HEIGHT);
    page.set_year(YEAR);
    let body = page.body();

    let header = page
        .build(&body, "header")
        .class("site-header")
        .height(HEADER_HEIGHT)
        .finish();
    let nav_toggle = page
        .build(&header, "button")
        .class("mobile-nav-toggle")
        .attr("aria-expanded", "false")
        .finish();
    let nav = page.build(&header, "nav").class("main-nav").finish();
    let list = page.build(&nav, "ul").finish();
    let links = SECTIONS
        .iter()
        .map(|(id, _, _)| {
            let item = page.build(&list, "li").finish();
            page.build(&item, "a")
                .attr("href", &format!("#{id}"))
                .finish()
        })
        .collect();

    let main = page.build(&body, "main").finish();
    let sections: Vec<MemoryElement> = SECTIONS
        .iter()
        .map(|(id, top, height)| {
            page.build(&main, "section")
                .id(id)
                .top(*top)
                .height(*height)
                .finish()
        })
        .collect();

    let hero = page.build(&sections[0], "div").class("hero-section").finish();
    let cta = page
        .build(&hero, "a")
        .class("btn")
        .class("btn-primary")
        .attr("href", "#projects")
        .finish();

    let cards = ["folio", "tracer"]
        .iter()
        .map(|name| {
            let card = page
                .build(&sections[2], "article")
                .class("project-card")
                .attr("data-project", name)
                .finish();
            let toggle = page
                .build(&card, "button")
                .class("project-toggle")
                .attr("aria-expanded", "false")
                .finish();
            let details = page.build(&card, "div").class("project-details").finish();
            let detail_link = page
                .build(&details, "a")
                .attr("href", &format!("https://example.com/{name}"))
                .finish();
            CardParts {
                card,
                toggle,
                details,
                detail_link,
            }
        })
        .collect();

    let footer = page.build(&body, "footer").finish();
    let year = page.build(&footer, "span").id("current-year").finish();
    let scroll_top = page.build(&body, "button").id("scrollToTopBtn").finish();

    Portfolio {
        page,
        header,
        nav_toggle,
        nav,
        links,
        cta,
        sections,
        scroll_top,
        cards,
        year,
    }
}
