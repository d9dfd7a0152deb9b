// Tests module
// Block construction: timing and fee-policy decision tests
// Timing: clock/parent/staker-horizon interaction, iterator release
// Fees: upgrade-gated regime selection and schedule layout

pub mod timing_invariants;

/// Install a test subscriber so traced decisions show up under
/// `cargo test -- --nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
