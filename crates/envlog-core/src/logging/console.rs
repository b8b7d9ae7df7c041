//! Console sink

use std::io;

use console::{style, StyledObject};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;

use super::level::Level;

/// stderr for warn and error, stdout for everything else
pub(crate) fn console_writer() -> impl for<'a> MakeWriter<'a> + Send + Sync + 'static {
    split_writer(io::stdout, io::stderr)
}

/// Route warn and error records to `err`, the rest to `out`
pub(crate) fn split_writer<O, E>(
    out: O,
    err: E,
) -> impl for<'a> MakeWriter<'a> + Send + Sync + 'static
where
    O: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    E: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    err.with_max_level(tracing::Level::WARN).or_else(out)
}

/// Level name in its console color
pub(crate) fn paint(level: Level) -> StyledObject<&'static str> {
    let styled = style(level.as_str()).force_styling(true);
    match level {
        Level::Debug => styled.blue(),
        Level::Info => styled.green(),
        Level::Warn => styled.yellow(),
        Level::Error => styled.red(),
    }
}
