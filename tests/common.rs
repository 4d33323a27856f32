use std::sync::Once;

static INIT: Once = Once::new();

/// Routes trace output to the test harness.  Safe to call from every test.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init()
            .ok();
    });
}
