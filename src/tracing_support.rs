//! Tracing subscriber setup.
//!
//! With the `tracing` feature enabled, [`init_tracing`] installs a `fmt`
//! layer writing to stderr plus a layer that accumulates the time spent in
//! each named span.  Without it, these functions are no-ops and the
//! library's spans and events go nowhere.
//!
//! The log level is read from the `GRL_LOG` environment variable (`error`,
//! `warn`, `info`, `debug` or `trace`) and defaults to `warn`.

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "GRL_LOG";

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing::Level;
    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    use super::LOG_LEVEL_VAR;

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    fn level_from_env() -> Level {
        std::env::var(LOG_LEVEL_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Level::WARN)
    }

    /// Installs the global subscriber.  Only the first call has any effect,
    /// and an already-installed subscriber is left in place.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(LevelFilter::from_level(level_from_env()));
            let _ = Registry::default()
                .with(TimingLayer)
                .with(fmt_layer)
                .try_init();
        });
    }

    /// Gets the accumulated `(span name, total time, count)` entries for the
    /// current thread, longest first.
    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        SPAN_TIMINGS.with(|totals| {
            let mut entries: Vec<_> = totals
                .borrow()
                .iter()
                .map(|(name, (duration, count))| (*name, *duration, *count))
                .collect();
            entries.sort_by(|a, b| b.1.cmp(&a.1));
            entries
        })
    }

    pub fn dump_span_timings() {
        eprintln!("Span timings (desc):");
        for (name, duration, count) in span_timings() {
            eprintln!("  {name}: {:?} ({}x)", duration, count);
        }
    }

    pub fn reset_span_timings() {
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    pub fn dump_span_timings() {
        // No-op when tracing is disabled
    }

    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
