//! Logger setup shared by all commands

/// Map a `-v` count to an `env_logger` filter
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` still takes precedence. Logging stays off in quiet mode.
pub fn init(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // A second initialisation (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level_for(verbose)),
    )
    .format_timestamp(None)
    .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(1, false);
        init(2, false);
    }
}
