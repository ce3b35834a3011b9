//! End-to-end behavior tests against the in-memory portfolio fixture.

use folio_core::{
    Activation, PageConfig, PageElement, PageHost, ScrollBehavior, WindowEvent, WireError, wire,
};
use folio_harness::fixture::{self, Portfolio};
use folio_harness::{MemoryPage, ScrollRequest};
use pretty_assertions::assert_eq;

fn wired() -> (Portfolio, folio_core::Controller<MemoryPage>) {
    let site = fixture::portfolio();
    let controller = wire(site.page.clone(), PageConfig::default());
    (site, controller)
}

fn active_links(site: &Portfolio) -> Vec<String> {
    site.links
        .iter()
        .filter(|l| l.has_class("active"))
        .filter_map(|l| l.attribute("href"))
        .collect()
}

fn smooth(top: f64) -> ScrollRequest {
    ScrollRequest {
        top,
        behavior: ScrollBehavior::Smooth,
    }
}

// ── Mobile navigation ─────────────────────────────────────────────────

#[test]
fn nav_toggle_flips_state_and_visibility() {
    let (site, _c) = wired();

    site.page.click(&site.nav_toggle);
    assert_eq!(site.nav_toggle.attribute("aria-expanded").as_deref(), Some("true"));
    assert!(site.nav.has_class("show"));

    site.page.click(&site.nav_toggle);
    assert_eq!(site.nav_toggle.attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!site.nav.has_class("show"));
}

#[test]
fn nav_toggle_without_attribute_opens() {
    let site = fixture::portfolio();
    site.nav_toggle.set_attribute("aria-expanded", "bogus");
    let _c = wire(site.page.clone(), PageConfig::default());

    site.page.click(&site.nav_toggle);
    assert_eq!(site.nav_toggle.attribute("aria-expanded").as_deref(), Some("true"));
}

#[test]
fn missing_nav_container_skips_toggle_only() {
    let page = MemoryPage::new();
    let body = page.body();
    let toggle = page
        .build(&body, "button")
        .class("mobile-nav-toggle")
        .attr("aria-expanded", "false")
        .finish();
    let year = page.build(&body, "span").id("current-year").finish();
    page.set_year(2031);

    let controller = wire(page.clone(), PageConfig::default());
    let outcome = page.click(&toggle);

    assert_eq!(outcome.listeners_run, 0);
    assert_eq!(toggle.attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(year.text(), "2031");
    assert!(controller.failures().is_empty());
}

// ── Smooth scroll ─────────────────────────────────────────────────────

#[test]
fn nav_link_scrolls_below_header_and_prevents_default() {
    let (site, controller) = wired();
    assert_eq!(controller.header_offset(), 80.0);

    let outcome = site.page.click(site.link("about"));
    assert!(outcome.default_prevented);
    assert_eq!(site.page.scroll_requests(), vec![smooth(520.0)]);
}

#[test]
fn nav_link_closes_open_menu() {
    let (site, _c) = wired();
    site.page.click(&site.nav_toggle);
    assert!(site.nav.has_class("show"));

    site.page.click(site.link("contact"));
    assert!(!site.nav.has_class("show"));
    assert_eq!(site.nav_toggle.attribute("aria-expanded").as_deref(), Some("false"));
}

#[test]
fn nav_link_leaves_closed_menu_untouched() {
    let (site, _c) = wired();
    site.page.click(site.link("home"));
    assert!(!site.nav.has_class("show"));
    assert_eq!(site.nav_toggle.attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(site.page.scroll_requests(), vec![smooth(-80.0)]);
}

#[test]
fn link_to_missing_section_scrolls_nowhere() {
    let site = fixture::portfolio();
    let list = site.links[0].closest("ul").unwrap();
    let item = site.page.build(&list, "li").finish();
    let dangling = site.page.build(&item, "a").attr("href", "#blog").finish();
    let _c = wire(site.page.clone(), PageConfig::default());

    let outcome = site.page.click(&dangling);
    assert!(outcome.default_prevented);
    assert!(site.page.scroll_requests().is_empty());
}

#[test]
fn non_fragment_href_scrolls_nowhere() {
    let site = fixture::portfolio();
    site.links[1].set_attribute("href", "/about.html");
    let _c = wire(site.page.clone(), PageConfig::default());

    site.page.click(&site.links[1]);
    assert!(site.page.scroll_requests().is_empty());
}

#[test]
fn cta_scrolls_but_keeps_menu_open() {
    let (site, _c) = wired();
    site.page.click(&site.nav_toggle);

    let outcome = site.page.click(&site.cta);
    assert!(outcome.default_prevented);
    assert_eq!(site.page.scroll_requests(), vec![smooth(1220.0)]);
    assert!(site.nav.has_class("show"));
}

#[test]
fn nav_link_closes_open_menu_without_toggle() {
    let page = MemoryPage::new();
    let body = page.body();
    let nav = page.build(&body, "nav").class("main-nav").class("show").finish();
    let link = page.build(&nav, "a").attr("href", "#about").finish();
    page.build(&body, "section").id("about").top(500.0).finish();

    let controller = wire(page.clone(), PageConfig::default());
    let outcome = page.click(&link);

    assert!(outcome.default_prevented);
    assert!(!nav.has_class("show"));
    assert_eq!(nav.attribute("aria-expanded"), None);
    assert_eq!(page.scroll_requests(), vec![smooth(490.0)]);
    assert!(controller.failures().is_empty());
}

#[test]
fn header_absent_uses_margin_only() {
    let page = MemoryPage::new();
    let body = page.body();
    let nav = page.build(&body, "nav").class("main-nav").finish();
    let link = page.build(&nav, "a").attr("href", "#about").finish();
    page.build(&body, "section").id("about").top(500.0).finish();

    let controller = wire(page.clone(), PageConfig::default());
    assert_eq!(controller.header_offset(), 10.0);

    page.click(&link);
    assert_eq!(page.scroll_requests(), vec![smooth(490.0)]);
}

// ── Active link ───────────────────────────────────────────────────────

#[test]
fn home_link_active_after_wiring() {
    let (site, controller) = wired();
    assert_eq!(active_links(&site), vec!["#home".to_string()]);
    assert_eq!(controller.active_section().as_deref(), Some("home"));
}

#[test]
fn scrolling_moves_the_active_link() {
    let (site, controller) = wired();

    for (y, expected) in [
        (519.0, "#home"),
        (520.0, "#about"),
        (900.0, "#about"),
        (1220.0, "#projects"),
        (1794.0, "#projects"),
        (1795.0, "#contact"),
        (0.0, "#home"),
    ] {
        site.page.scroll_y_to(y);
        assert_eq!(active_links(&site), vec![expected.to_string()], "scroll_y = {y}");
    }
    assert_eq!(controller.active_section().as_deref(), Some("home"));
}

#[test]
fn above_first_section_forces_home() {
    let site = fixture::portfolio();
    site.sections[0].set_attribute("id", "intro");
    for (section, offset) in site.sections.iter().zip([400.0, 900.0, 1500.0, 2200.0]) {
        section.set_offset_top(offset);
    }
    let _c = wire(site.page.clone(), PageConfig::default());

    site.page.scroll_y_to(100.0);
    assert_eq!(active_links(&site), vec!["#home".to_string()]);
    site.page.scroll_y_to(320.0);
    assert_eq!(active_links(&site), Vec::<String>::new());
}

#[test]
fn no_matching_link_marks_none() {
    let site = fixture::portfolio();
    site.links[1].set_attribute("href", "#elsewhere");
    let _c = wire(site.page.clone(), PageConfig::default());

    site.page.scroll_y_to(900.0);
    assert!(active_links(&site).is_empty());
}

#[test]
fn duplicate_links_mark_only_the_first() {
    let site = fixture::portfolio();
    site.links[2].set_attribute("href", "#about");
    let _c = wire(site.page.clone(), PageConfig::default());

    site.page.scroll_y_to(900.0);
    assert!(site.links[1].has_class("active"));
    assert!(!site.links[2].has_class("active"));
}

#[test]
fn no_sections_clears_every_link() {
    let page = MemoryPage::new();
    let body = page.body();
    let nav = page.build(&body, "nav").class("main-nav").finish();
    let link = page
        .build(&nav, "a")
        .class("active")
        .attr("href", "#home")
        .finish();

    let controller = wire(page.clone(), PageConfig::default());
    assert!(!link.has_class("active"));
    assert_eq!(controller.active_section(), None);
}

#[test]
fn refresh_picks_up_moved_sections() {
    let (site, controller) = wired();
    site.page.scroll_y_to(900.0);
    assert_eq!(active_links(&site), vec!["#about".to_string()]);

    site.sections[2].set_offset_top(950.0);
    controller.refresh();
    assert_eq!(active_links(&site), vec!["#projects".to_string()]);
}

// ── Scroll to top ─────────────────────────────────────────────────────

#[test]
fn scroll_top_threshold_is_strict() {
    let (site, _c) = wired();
    for (y, visible) in [(299.0, false), (300.0, false), (301.0, true), (0.0, false)] {
        site.page.scroll_y_to(y);
        assert_eq!(site.scroll_top.has_class("show"), visible, "scroll_y = {y}");
    }
}

#[test]
fn scroll_top_click_requests_top() {
    let (site, _c) = wired();
    site.page.scroll_y_to(1500.0);
    site.page.click(&site.scroll_top);
    assert_eq!(site.page.scroll_requests(), vec![smooth(0.0)]);
}

#[test]
fn scroll_top_absent_attaches_no_scroll_listener_for_it() {
    let page = MemoryPage::new();
    let _c = wire(page.clone(), PageConfig::default());
    assert_eq!(page.window_listener_count(WindowEvent::Scroll), 0);

    let (site, _c) = wired();
    assert_eq!(site.page.window_listener_count(WindowEvent::Scroll), 2);
}

// ── Project cards ─────────────────────────────────────────────────────

#[test]
fn card_toggle_expands_and_mirrors_attribute() {
    let (site, _c) = wired();
    let parts = &site.cards[0];

    site.page.click(&parts.toggle);
    assert!(parts.card.has_class("expanded"));
    assert_eq!(parts.toggle.attribute("aria-expanded").as_deref(), Some("true"));

    site.page.click(&parts.toggle);
    assert!(!parts.card.has_class("expanded"));
    assert_eq!(parts.toggle.attribute("aria-expanded").as_deref(), Some("false"));
}

#[test]
fn cards_expand_independently() {
    let (site, _c) = wired();
    site.page.click(&site.cards[0].toggle);
    site.page.click(&site.cards[1].toggle);
    assert!(site.cards[0].card.has_class("expanded"));
    assert!(site.cards[1].card.has_class("expanded"));

    site.page.click(&site.cards[0].toggle);
    assert!(!site.cards[0].card.has_class("expanded"));
    assert!(site.cards[1].card.has_class("expanded"));
}

#[test]
fn toggle_outside_any_card_is_a_no_op() {
    let site = fixture::portfolio();
    let stray = site
        .page
        .build(&site.page.body(), "button")
        .class("project-toggle")
        .attr("aria-expanded", "false")
        .finish();
    let _c = wire(site.page.clone(), PageConfig::default());

    site.page.click(&stray);
    assert_eq!(stray.attribute("aria-expanded").as_deref(), Some("false"));
}

#[test]
fn detail_link_click_never_reaches_card_listeners() {
    let (site, _c) = wired();
    let parts = site.cards[0].clone();
    site.page.click(&parts.toggle);
    assert!(parts.card.has_class("expanded"));

    // A card-level listener, as older page scripts attached.
    let card_config = PageConfig::default();
    let card_toggle = parts.toggle.clone();
    site.page.listen_click(
        &parts.card,
        Box::new(move |_: &mut dyn Activation| {
            folio_core::behavior::cards::toggle_card(&card_toggle, &card_config);
        }),
    );

    let outcome = site.page.click(&parts.detail_link);
    assert!(outcome.propagation_stopped);
    assert!(!outcome.default_prevented);
    assert!(parts.card.has_class("expanded"));
    assert_eq!(parts.toggle.attribute("aria-expanded").as_deref(), Some("true"));
}

// ── Copyright year ────────────────────────────────────────────────────

#[test]
fn year_is_written_once_at_wiring() {
    let (site, _c) = wired();
    assert_eq!(site.year.text(), "2031");

    site.page.set_year(2032);
    site.page.scroll_y_to(400.0);
    assert_eq!(site.year.text(), "2031");
}

// ── Controller surface ────────────────────────────────────────────────

#[test]
fn scroll_to_section_uses_link_offset_rule() {
    let (site, controller) = wired();
    assert!(controller.scroll_to_section("contact"));
    assert!(!controller.scroll_to_section("nowhere"));
    assert_eq!(site.page.scroll_requests(), vec![smooth(2120.0)]);
}

#[test]
fn header_offset_is_stale_after_resize_by_default() {
    let (site, controller) = wired();
    site.header.set_offset_height(120.0);
    site.page.fire(WindowEvent::Resize);
    assert_eq!(controller.header_offset(), 80.0);
}

#[test]
fn header_offset_follows_resize_when_enabled() {
    let site = fixture::portfolio();
    let config = PageConfig {
        remeasure_header_on_resize: true,
        ..PageConfig::default()
    };
    let controller = wire(site.page.clone(), config);

    site.header.set_offset_height(120.0);
    site.page.fire(WindowEvent::Resize);
    assert_eq!(controller.header_offset(), 130.0);

    site.page.click(site.link("about"));
    assert_eq!(site.page.scroll_requests(), vec![smooth(470.0)]);
}

#[test]
fn custom_config_is_honored() {
    let site = fixture::portfolio();
    let config =
        PageConfig::from_json_str(r#"{"scrollTopThreshold": 100, "activeClass": "current"}"#)
            .unwrap();
    let _c = wire(site.page.clone(), config);

    site.page.scroll_y_to(150.0);
    assert!(site.scroll_top.has_class("show"));
    assert!(site.link("home").has_class("current"));
    assert!(!site.link("home").has_class("active"));
}

#[test]
fn refused_listeners_are_collected_and_rest_still_applies() {
    let site = fixture::portfolio();
    site.page.refuse_listeners(true);
    let controller = wire(site.page.clone(), PageConfig::default());

    // 1 toggle + 4 links + cta + highlight scroll + scroll-top scroll/click
    // + 2 card toggles + 2 detail links
    assert_eq!(controller.failures().len(), 13);
    assert!(matches!(
        controller.failures()[0],
        WireError::Listener {
            role: "nav-toggle",
            event: "click",
            ..
        }
    ));
    let roles: Vec<&str> = controller
        .failures()
        .iter()
        .filter_map(|err| match err {
            WireError::Listener { role, .. } => Some(*role),
            _ => None,
        })
        .collect();
    assert_eq!(
        roles,
        [
            "nav-toggle",
            "nav-link",
            "nav-link",
            "nav-link",
            "nav-link",
            "cta",
            "highlight",
            "scroll-top",
            "scroll-top",
            "project-toggle",
            "project-toggle",
            "detail-link",
            "detail-link",
        ]
    );
    assert_eq!(site.year.text(), "2031");
    assert!(site.link("home").has_class("active"));
    assert_eq!(controller.host().current_year(), 2031);
}
