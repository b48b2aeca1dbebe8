use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if args.json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!("logger already initialized: {e}");
    }
}
