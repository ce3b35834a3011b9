#![forbid(unsafe_code)]

//! JS-facing API.
//!
//! ```js
//! import init, { initPortfolio } from "./folio_web.js";
//! await init();
//! initPortfolio({ scrollTopThreshold: 300 });
//! ```

use std::cell::RefCell;

use folio_core::{Controller, PageConfig, WireError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::dom::{DomHost, describe};
use crate::options::options_for_init;
use crate::status::PortfolioStatus;

thread_local! {
    static CONTROLLER: RefCell<Option<Controller<DomHost>>> = const { RefCell::new(None) };
    static PENDING: RefCell<bool> = const { RefCell::new(false) };
}

fn to_js(err: WireError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn stringify(options: Option<JsValue>) -> Result<Option<String>, JsValue> {
    match options {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            let json = js_sys::JSON::stringify(&value)?;
            Ok(json.as_string())
        }
        _ => Ok(None),
    }
}

fn start(host: DomHost, config: PageConfig) {
    PENDING.with(|p| *p.borrow_mut() = false);
    let controller = folio_core::wire(host, config);
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
}

fn already_started() -> bool {
    CONTROLLER.with(|slot| slot.borrow().is_some()) || PENDING.with(|p| *p.borrow())
}

/// Wire the page controller once the markup is parsed.
///
/// `options` is an optional plain object overriding selectors, class names
/// and thresholds. Calling this again after a successful call does nothing,
/// whatever the options.
///
/// # Errors
///
/// Throws a string if the options are invalid or there is no page.
#[wasm_bindgen(js_name = initPortfolio)]
pub fn init_portfolio(options: Option<JsValue>) -> Result<(), JsValue> {
    let started = already_started();
    let json = if started { None } else { stringify(options)? };
    let Some(config) = options_for_init(started, json.as_deref()).map_err(to_js)? else {
        #[cfg(feature = "tracing")]
        tracing::warn!("initPortfolio called twice, ignoring");
        return Ok(());
    };

    #[cfg(feature = "tracing")]
    crate::logging::install(&config.log_level);

    let window = web_sys::window().ok_or_else(|| to_js(WireError::NoWindow))?;
    let host = DomHost::from_window(window).map_err(to_js)?;

    if !host.is_loading() {
        start(host, config);
        return Ok(());
    }

    let document = host.document().clone();
    let on_ready = Closure::<dyn FnMut(Event)>::once(move |_event: Event| start(host, config));
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| to_js(WireError::listener("DOMContentLoaded", describe(&err))))?;
    on_ready.forget();
    PENDING.with(|p| *p.borrow_mut() = true);
    Ok(())
}

/// Re-run active-link and scroll-to-top updates without a scroll event.
#[wasm_bindgen(js_name = refreshPortfolio)]
pub fn refresh_portfolio() {
    CONTROLLER.with(|slot| {
        if let Some(controller) = slot.borrow().as_ref() {
            controller.refresh();
        }
    });
}

/// Smooth-scroll to section `id`. Returns `false` if it does not exist or
/// the page is not wired yet.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) -> bool {
    CONTROLLER.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|controller| controller.scroll_to_section(id))
    })
}

/// JSON snapshot: wired flag, active section, header offset, failures.
#[wasm_bindgen(js_name = portfolioStatus)]
pub fn portfolio_status() -> String {
    CONTROLLER.with(|slot| match slot.borrow().as_ref() {
        Some(controller) => PortfolioStatus::of(controller),
        None => PortfolioStatus::pending(),
    })
    .to_json()
}
