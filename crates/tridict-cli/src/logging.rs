use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install the stderr subscriber. `RUST_LOG` wins over `level`; `verbose`
/// forces debug output.
pub fn init(level: &str, verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}
