mod scenarios;
mod shared;

/// Install a logger for the current test. Output only shows up with the
/// 'logging' feature enabled and RUST_LOG set.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
