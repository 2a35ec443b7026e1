// Single source of truth for all default values.

// --- Detection ---
pub const DEFAULT_WINDOW_SIZE_HOURS: u32 = 2;
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: usize = 1;
pub const DEFAULT_BOX_KEEPALIVE_HOURS: u32 = 0;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.1;

// --- Text ---
pub const DEFAULT_MIN_WORD_LENGTH: usize = 0;

// --- Stop words ---
pub const DEFAULT_STOPWORD_TFIDF_THRESHOLD: f64 = 0.05;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
