//! Tests for log level selection and subscriber installation

#[cfg(test)]
mod tests {
    use pipetile::io::logging::{build_filter, init_logging, level_for_verbosity};

    // Tests each -v step raises the level
    // Verified by mapping zero to info
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(3), "trace");
        assert_eq!(level_for_verbosity(u8::MAX), "trace");
    }

    // Tests filters build for every verbosity without panicking
    // Verified by indexing a fixed level table
    #[test]
    fn test_build_filter() {
        for verbosity in 0..5 {
            let _filter = build_filter(verbosity);
        }
    }

    // Tests installing twice reports the existing subscriber
    // Verified by panicking on a second install
    #[test]
    fn test_init_logging_once() {
        let _first = init_logging(1);
        assert!(!init_logging(2));
    }
}
