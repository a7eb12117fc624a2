//! Process-wide log sink.
//!
//! One line per event, `LEVEL: message`, written to standard error.

use dyndns_core::Verbosity;
use tracing::{Event, Subscriber};
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Event format printing only the level and the message fields
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelPrefixed;

impl<S, N> FormatEvent<S, N> for LevelPrefixed
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build the subscriber for `verbosity`, writing to `make_writer`
pub fn subscriber<W>(verbosity: Verbosity, make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    FmtSubscriber::builder()
        .with_max_level(verbosity.level())
        .with_writer(make_writer)
        .event_format(LevelPrefixed)
        .finish()
}

/// Install the global subscriber. Must be called once, before anything logs.
pub fn init(verbosity: Verbosity) -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(subscriber(verbosity, std::io::stderr))?;
    Ok(())
}

/// In-memory log sink for tests
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl Captured {
    pub(crate) fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Subscriber writing into this sink
    pub(crate) fn into_subscriber(self, verbosity: Verbosity) -> impl Subscriber + Send + Sync {
        subscriber(verbosity, move || self.clone())
    }
}
