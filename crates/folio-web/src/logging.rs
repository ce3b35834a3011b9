#![forbid(unsafe_code)]

//! Tracing layer that writes formatted events to the browser console.
//!
//! Events are rendered as one line
//! (`LEVEL target: message key=value ...`) and handed to a sink chosen by
//! level. On wasm32 the sink is `console.error/warn/info/debug`; tests
//! supply their own.
//!
//! ```ignore
//! folio_web::logging::install("debug");
//! ```

use std::fmt::{self, Write as FmtWrite};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// Receives each formatted line with its level.
pub type ConsoleSink = Box<dyn Fn(Level, &str) + Send + Sync>;

/// Extracts message and structured fields from a tracing event.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.fields.push((field.name().to_string(), rendered));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

fn level_str(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// `tracing_subscriber` layer routing events to a [`ConsoleSink`].
pub struct BrowserConsoleLayer {
    sink: ConsoleSink,
}

impl BrowserConsoleLayer {
    #[must_use]
    pub fn new(sink: ConsoleSink) -> Self {
        Self { sink }
    }

    fn format(level: Level, target: &str, visitor: &EventVisitor) -> String {
        let mut line = format!("{} {target}:", level_str(level));
        if let Some(message) = &visitor.message {
            let _ = write!(line, " {message}");
        }
        for (name, value) in &visitor.fields {
            let _ = write!(line, " {name}={value}");
        }
        line
    }
}

impl<S: Subscriber> Layer<S> for BrowserConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        let line = Self::format(*meta.level(), meta.target(), &visitor);
        (self.sink)(*meta.level(), &line);
    }
}

#[cfg(target_arch = "wasm32")]
fn console_sink(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&line),
    }
}

/// Install the console layer as the global subscriber, filtered at `level`.
///
/// Unknown levels fall back to `info`. A second install is ignored.
#[cfg(target_arch = "wasm32")]
pub fn install(level: &str) {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let layer = BrowserConsoleLayer::new(Box::new(console_sink)).with_filter(filter);
    let _ = tracing_subscriber::registry().with(layer).try_init();
}
