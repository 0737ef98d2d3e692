//! Diagnostic channel.
//!
//! Lenient operations never fail loudly: they report the error here and
//! return a default value. Reports go out as `tracing` ERROR events, so the
//! stream is redirected by whatever subscriber is active. [`DiagnosticCapture`]
//! is a ready-made one that collects the messages verbatim.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use super::Error;

/// Target used for every event emitted by this crate.
pub const TARGET: &str = "animtrack";

/// Environment variable holding the log filter for [`init_tracing`].
pub const LOG_ENV: &str = "ANIMTRACK_LOG";

/// Report an error once on the diagnostic channel.
#[inline]
pub(crate) fn report(err: &Error) {
    tracing::error!(target: TARGET, "{err}");
}

/// Install a global fmt subscriber filtered by `ANIMTRACK_LOG`.
///
/// Defaults to `warn`. Returns false if a global subscriber was already set.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Collects reported errors, one message per entry.
///
/// ```
/// use animtrack::util::DiagnosticCapture;
///
/// let capture = DiagnosticCapture::new();
/// capture.scope(|| {
///     let keys = [0.0f32, 1.0];
///     let values: [f32; 0] = [];
///     let mut hint = 0;
///     animtrack::animation::interpolate(
///         (&keys[..]).into(), (&values[..]).into(),
///         Default::default(), Default::default(),
///         animtrack::animation::lerp::<f32>, 0.5, &mut hint,
///     );
/// });
/// assert_eq!(capture.output(), "animation::interpolate(): keys and values don't have the same size\n");
/// ```
#[derive(Clone, Default)]
pub struct DiagnosticCapture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl DiagnosticCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with reports on this thread redirected into the capture.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            lines: Arc::clone(&self.lines),
        });
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Captured messages in report order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Captured messages, each terminated by a newline.
    pub fn output(&self) -> String {
        self.lines.lock().iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

struct CaptureLayer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::ERROR {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.lines.lock().push(visitor.0);
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.0, "{value:?}");
        }
    }
}
