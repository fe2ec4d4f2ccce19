use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, writer::MakeWriterExt, MakeWriter},
    prelude::*,
    EnvFilter,
};

/// Sets up a tracing subscriber. `RUST_LOG` takes precedence over `env_filter`.
pub fn get_subscriber<Sink>(env_filter: String, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    get_subscriber_with_filter(filter_layer, sink)
}

/// Sets up a tracing subscriber with exactly `filter_layer`, ignoring `RUST_LOG`.
pub fn get_subscriber_with_filter<Sink>(
    filter_layer: EnvFilter,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(sink);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
}

/// Routes WARN and ERROR events to stderr and everything else to stdout.
pub fn console_sink() -> impl for<'a> MakeWriter<'a> + Send + Sync + 'static {
    std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout)
}

/// Sets the global default subscriber. Should only be called once.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    let _ = tracing::subscriber::set_global_default(subscriber)
        .map_err(|_err| eprintln!("Unable to set global default subscriber"));
}
