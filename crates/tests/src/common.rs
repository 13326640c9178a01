use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use ui_core::DEPRECATION_TARGET;

/// Render a component tree once and return its markup.
pub fn render(app: fn() -> Element) -> String {
    Harness::new(app).html()
}

/// A mounted virtual DOM that tests can poke at between renders.
pub struct Harness {
    dom: VirtualDom,
}

impl Harness {
    pub fn new(app: fn() -> Element) -> Self {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        Self { dom }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Run `f` inside the root scope, as an event handler would.
    pub fn act<O>(&mut self, f: impl FnOnce() -> O) -> O {
        let out = self.dom.in_scope(ScopeId::APP, f);
        self.flush();
        out
    }

    /// Apply pending signal writes and re-render dirty scopes.
    pub fn flush(&mut self) {
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    /// Force the root to render again with unchanged props.
    pub fn rerender(&mut self) {
        self.dom.mark_dirty(ScopeId::APP);
        self.flush();
    }

    /// Drive spawned tasks until one of them dirties a scope, or give up.
    pub async fn settle(&mut self, limit: Duration) -> bool {
        let woke = tokio::time::timeout(limit, self.dom.wait_for_work())
            .await
            .is_ok();
        self.flush();
        woke
    }
}

/// One event captured from the deprecation target.
#[derive(Debug, Clone, PartialEq)]
pub struct Captured {
    pub component: String,
    pub message: String,
}

/// Records every warning logged under the deprecation target.
#[derive(Clone, Default)]
pub struct WarningSpy {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl WarningSpy {
    pub fn events(&self) -> Vec<Captured> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.message).collect()
    }
}

#[derive(Default)]
struct FieldVisitor {
    component: String,
    message: String,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "component" => self.component = value.to_string(),
            "message" => self.message = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "component" => self.component = format!("{value:?}"),
            "message" => self.message = format!("{value:?}"),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for WarningSpy {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != DEPRECATION_TARGET {
            return;
        }
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        if let Ok(mut events) = self.events.lock() {
            events.push(Captured {
                component: visitor.component,
                message: visitor.message,
            });
        }
    }
}

/// Run `f` with a subscriber that records deprecation warnings.
pub fn with_spy<O>(f: impl FnOnce() -> O) -> (O, WarningSpy) {
    let spy = WarningSpy::default();
    let subscriber = tracing_subscriber::registry().with(spy.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, spy)
}
