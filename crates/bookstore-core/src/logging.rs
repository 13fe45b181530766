//! Tracing setup for applications embedding the catalog.
//!
//! The catalog itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,bookstore_core=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bookstore_core=trace` - Trace this crate only
/// - Default: [`DEFAULT_FILTER`]
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_target(true)
        .try_init();
}

/// Parses `directives`, falling back to [`DEFAULT_FILTER`].
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{buy, Book};
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_filter_when_unset() {
        let filter = env_filter(None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_directives_override_default() {
        let filter = env_filter(Some("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_unparsable_directives_fall_back_to_default() {
        let filter = env_filter(Some("bookstore_core=loud"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
        assert!(tracing::dispatcher::has_been_set());

        let book = Book::new(1, "Spark Joy", "Marie Kondo").with_copies(1);
        assert!(buy(&book).is_ok());
    }
}
