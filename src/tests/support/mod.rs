pub mod fixtures;
pub mod stubs;

/// Logs from the code under test show up with `cargo test -- --nocapture`.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("account_sync=debug")
        .try_init();
}
