use tracing_subscriber::EnvFilter;

// install a subscriber once per test binary; RUST_LOG selects the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
