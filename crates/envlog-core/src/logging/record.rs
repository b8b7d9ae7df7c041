//! Records: static callsites, dispatch, and the
//! `<timestamp> <level>: <message>` layout

use std::fmt;

use chrono::Local;
use tracing::field::{self, Value};
use tracing::{Dispatch, Event, Metadata, Subscriber};
use tracing_core::callsite::Callsite;
use tracing_core::field::FieldSet;
use tracing_core::metadata::Kind;
use tracing_core::subscriber::Interest;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::console::paint;
use super::level::Level;

/// `tracing` target of every record
pub const TARGET: &str = "envlog";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

macro_rules! record_callsite {
    ($ty:ident, $callsite:ident, $meta:ident, $level:expr) => {
        struct $ty;
        static $callsite: $ty = $ty;
        static $meta: Metadata<'static> = Metadata::new(
            "envlog record",
            TARGET,
            $level,
            None,
            None,
            None,
            FieldSet::new(&["message"], tracing_core::identify_callsite!(&$callsite)),
            Kind::EVENT,
        );

        impl Callsite for $ty {
            fn set_interest(&self, _: Interest) {}

            fn metadata(&self) -> &Metadata<'_> {
                &$meta
            }
        }
    };
}

record_callsite!(DebugCallsite, DEBUG_CS, DEBUG_META, tracing::Level::DEBUG);
record_callsite!(InfoCallsite, INFO_CS, INFO_META, tracing::Level::INFO);
record_callsite!(WarnCallsite, WARN_CS, WARN_META, tracing::Level::WARN);
record_callsite!(ErrorCallsite, ERROR_CS, ERROR_META, tracing::Level::ERROR);

fn metadata(level: Level) -> &'static Metadata<'static> {
    match level {
        Level::Debug => &DEBUG_META,
        Level::Info => &INFO_META,
        Level::Warn => &WARN_META,
        Level::Error => &ERROR_META,
    }
}

/// Hand one record straight to `dispatch`
///
/// The thread's default dispatcher is never touched, so this is safe to call
/// while a host subscriber is mid-event on the same thread.
pub(crate) fn dispatch_record(dispatch: &Dispatch, level: Level, text: &str) {
    let metadata = metadata(level);
    if !dispatch.enabled(metadata) {
        return;
    }

    let fields = metadata.fields();
    let Some(message) = fields.field("message") else {
        return;
    };
    let text = field::display(text);
    let values = [(&message, Some(&text as &dyn Value))];
    dispatch.event(&Event::new(metadata, &fields.value_set(&values)));
}

/// Event formatter shared by both transports
///
/// The level is colorized only when the writer accepts ANSI escapes.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RecordFormat;

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let level = Level::from_tracing(event.metadata().level()).unwrap_or(Level::Debug);

        if writer.has_ansi_escapes() {
            write!(writer, "{} {}: ", timestamp, paint(level))?;
        } else {
            write!(writer, "{} {}: ", timestamp, level)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
