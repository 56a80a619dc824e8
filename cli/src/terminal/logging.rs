use colored::{ColoredString, Colorize};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Renders events as a colored level tag followed by the message, one
/// line each. Verbose levels carry the event target so `RUST_LOG`
/// filtering has something to aim at.
pub struct DockmapFormatter;

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[.]".dimmed(),
        Level::DEBUG => "[?]".cyan(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[!]".yellow().bold(),
        Level::ERROR => "[x]".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for DockmapFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{} ", level_tag(*meta.level()))?;
        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the formatter. Logs go to stderr so the report on stdout
/// stays clean for piping.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .event_format(DockmapFormatter)
        .init();
}
