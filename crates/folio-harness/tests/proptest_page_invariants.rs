//! Property-based invariant tests for the wired portfolio page.
//!
//! Verifies:
//! 1. At most one navigation link is active after any scroll sequence
//! 2. Between two adjacent section thresholds the earlier section is active
//! 3. At scroll 0 on a tall page the home link is active
//! 4. Within the bottom tolerance the last section is active
//! 5. Scroll-to-top visibility is exactly `scroll_y > 300`
//! 6. An even number of card toggles restores class and attribute
//! 7. Detail-link clicks never change any card's state or reach card listeners

use std::cell::Cell;
use std::rc::Rc;

use folio_core::{Activation, PageConfig, PageElement, wire};
use folio_harness::fixture::{self, DOCUMENT_HEIGHT, SECTIONS, VIEWPORT_HEIGHT};
use proptest::prelude::*;

const HEADER_OFFSET: f64 = fixture::HEADER_HEIGHT + 10.0;

fn active_count(site: &fixture::Portfolio) -> usize {
    site.links.iter().filter(|l| l.has_class("active")).count()
}

fn active_href(site: &fixture::Portfolio) -> Option<String> {
    site.links
        .iter()
        .find(|l| l.has_class("active"))
        .and_then(|l| l.attribute("href"))
}

/// Last scroll offset before the bottom rule takes over.
fn bottom_start() -> f64 {
    DOCUMENT_HEIGHT - 5.0 - VIEWPORT_HEIGHT
}

proptest! {
    #[test]
    fn at_most_one_link_active(scrolls in prop::collection::vec(-200.0f64..3000.0, 1..30)) {
        let site = fixture::portfolio();
        let _c = wire(site.page.clone(), PageConfig::default());
        for y in scrolls {
            site.page.scroll_y_to(y);
            prop_assert!(active_count(&site) <= 1);
        }
    }

    #[test]
    fn earlier_section_wins_between_thresholds(index in 0usize..3, frac in 0.0f64..1.0) {
        let site = fixture::portfolio();
        let _c = wire(site.page.clone(), PageConfig::default());

        let lo = SECTIONS[index].1 - HEADER_OFFSET;
        let hi = (SECTIONS[index + 1].1 - HEADER_OFFSET).min(bottom_start());
        prop_assume!(lo < hi);
        let y = (lo + (hi - lo) * frac).max(0.0);
        prop_assume!(y < hi);

        site.page.scroll_y_to(y);
        let expected = format!("#{}", SECTIONS[index].0);
        prop_assert_eq!(active_href(&site), Some(expected));
    }

    #[test]
    fn home_active_at_top_regardless_of_offsets(first in 0.0f64..600.0) {
        let site = fixture::portfolio();
        site.sections[0].set_offset_top(first);
        let _c = wire(site.page.clone(), PageConfig::default());

        site.page.scroll_y_to(0.0);
        prop_assert_eq!(active_href(&site), Some("#home".to_string()));
    }

    #[test]
    fn bottom_tolerance_forces_last_section(slack in 0.0f64..=5.0) {
        let site = fixture::portfolio();
        let _c = wire(site.page.clone(), PageConfig::default());

        site.page.scroll_y_to(DOCUMENT_HEIGHT - VIEWPORT_HEIGHT - slack);
        prop_assert_eq!(active_href(&site), Some("#contact".to_string()));
    }

    #[test]
    fn scroll_top_visibility_matches_threshold(y in -100.0f64..1000.0) {
        let site = fixture::portfolio();
        let _c = wire(site.page.clone(), PageConfig::default());

        site.page.scroll_y_to(y);
        prop_assert_eq!(site.scroll_top.has_class("show"), y > 300.0);
    }

    #[test]
    fn even_toggles_restore_card(pairs in 0usize..6, which in 0usize..2) {
        let site = fixture::portfolio();
        let _c = wire(site.page.clone(), PageConfig::default());
        let parts = &site.cards[which];

        for _ in 0..pairs * 2 {
            site.page.click(&parts.toggle);
        }
        prop_assert!(!parts.card.has_class("expanded"));
        prop_assert_eq!(parts.toggle.attribute("aria-expanded"), Some("false".to_string()));
    }

    #[test]
    fn detail_links_leave_cards_alone(clicks in prop::collection::vec(0usize..4, 1..20)) {
        let site = fixture::portfolio();
        let _c = wire(site.page.clone(), PageConfig::default());
        let reached: Vec<Rc<Cell<usize>>> = site
            .cards
            .iter()
            .map(|parts| {
                let hits = Rc::new(Cell::new(0));
                let counter = Rc::clone(&hits);
                site.page.listen_click(
                    &parts.card,
                    Box::new(move |_: &mut dyn Activation| counter.set(counter.get() + 1)),
                );
                hits
            })
            .collect();

        // 0/1 toggle a card, 2/3 click that card's detail link.
        let mut expected = [false, false];
        let mut toggle_clicks = [0usize, 0];
        for click in clicks {
            let card = click % 2;
            if click < 2 {
                site.page.click(&site.cards[card].toggle);
                expected[card] = !expected[card];
                toggle_clicks[card] += 1;
            } else {
                let outcome = site.page.click(&site.cards[card].detail_link);
                prop_assert!(outcome.propagation_stopped);
            }
            for (parts, want) in site.cards.iter().zip(expected) {
                prop_assert_eq!(parts.card.has_class("expanded"), want);
            }
            // Only toggle clicks bubble up to the card.
            for (hits, want) in reached.iter().zip(toggle_clicks) {
                prop_assert_eq!(hits.get(), want);
            }
        }
    }
}
