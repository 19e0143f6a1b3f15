use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber. Stdout is left to the report.
/// Falls back to `warn` when `filter` does not parse; a second call is a no-op.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn test_repeated_init_is_harmless() {
        init("aggbench=debug");
        init("[[not a filter");
        assert!(tracing::dispatcher::has_been_set());
    }
}
