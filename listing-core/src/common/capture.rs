//! Event capture for log assertions in tests

use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records `(target, level)` of every event it sees
#[derive(Clone, Default)]
pub(crate) struct EventCapture {
    events: Arc<Mutex<Vec<(String, Level)>>>,
}

impl EventCapture {
    pub(crate) fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        tracing_subscriber::registry().with(self.clone())
    }

    /// Levels of events logged on the `security` target, in order
    pub(crate) fn security_levels(&self) -> Vec<Level> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(target, _)| target == "security")
            .map(|(_, level)| *level)
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        self.events
            .lock()
            .unwrap()
            .push((meta.target().to_string(), *meta.level()));
    }
}
