//! Default configuration values
//!
//! Named constants for the driver settings. Analyzer parameter defaults
//! live next to each analyzer.

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default message source
pub const DEFAULT_SOURCE: &str = "os";

/// Candidates run by `suite` when none are given
pub const DEFAULT_HASHES: &[&str] = &["sha2-256", "sha3-512", "ascon-stub"];

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "hash-diffusion";
