//! Log capture for tests.
//!
//! The tokenizer and tree builder report every record at `trace` level and a
//! summary per file at `debug`. [`init_test_tracing`] routes those events into
//! the harness output so a failing parse shows how far it got.

use tracing_subscriber::EnvFilter;

/// Install a subscriber that prints parser events alongside test output.
///
/// Without `RUST_LOG` the filter is `debug`, which shows per-file summaries
/// but not per-line records. Only the first call in a test binary installs
/// anything.
///
/// ```ignore
/// #[test]
/// fn nested_sections() {
///     optsfile_test_utils::tracing_setup::init_test_tracing();
///     let options = optsfile::parse_str("A:\n\tb: c").unwrap();
///     assert_eq!(options.len(), 1);
/// }
/// ```
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
