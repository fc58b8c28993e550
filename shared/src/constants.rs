/// Name of the query parameter that carries the encoded option list.
pub const QUERY_PARAM: &str = "data";

/// Longest token we are willing to put in a shareable link.
pub const MAX_TOKEN_LENGTH: usize = 2000;

pub const MIN_SPIN_OPTIONS: usize = 2;

pub const PLACEHOLDER_LABEL: &str = "Add an option";
pub const PLACEHOLDER_WEDGES: usize = 4;

pub const SHARE_SUMMARY_CHARS: usize = 10;
pub const SHARE_SUMMARY_SUFFIX: &str = "... Roulette";

// Animation
pub const SPIN_DURATION_MS: u32 = 3000;
pub const MIN_SPINS: f64 = 5.0;
pub const MAX_SPINS: f64 = 8.0;

pub const NOTIFICATION_MS: u32 = 3000;

pub const TOO_MUCH_DATA_ERROR: &str = "Too much data";
pub const COPY_SUCCESS: &str = "Link copied";
pub const COPY_FAILED_ERROR: &str = "Copy failed, please copy the URL manually";
