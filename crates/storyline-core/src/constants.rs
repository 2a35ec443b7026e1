/// Storyline version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default token pattern: runs of at least two non-space characters that end
/// in a letter or digit. Embedded punctuation survives ("u.s.a", "$42.42").
pub const DEFAULT_TOKEN_PATTERN: &str = r"[^\s]+[\p{L}\p{N}]";

/// Upper bound of the box similarity scale. Identical document sets score this.
pub const MAX_BOX_SIMILARITY: f64 = 0.5;

/// Largest accepted window size and box keepalive, in hours (about a century).
pub const MAX_WINDOW_HOURS: u32 = 876_000;

/// Environment variable read for log filtering.
pub const LOG_ENV_VAR: &str = "STORYLINE_LOG";

/// Column width used by the console timeline renderer.
pub const CONSOLE_WIDTH: usize = 79;
