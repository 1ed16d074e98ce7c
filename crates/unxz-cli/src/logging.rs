use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry, filter, fmt};

pub fn start(level: LevelFilter) {
    let fmt_filter = filter::Targets::new()
        .with_target("unxz", level)
        .with_default(LevelFilter::WARN);
    let fmt = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(fmt_filter);

    let subscriber = Registry::default().with(fmt);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("unxz: a global tracing subscriber is already installed");
    }
}
