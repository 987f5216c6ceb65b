//! Exit codes for brawlctl.

/// Exit code for success, including a plan with nothing to buy.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors (I/O failures, invalid level range).
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the resource table is missing or malformed.
pub const EXIT_RESOURCES_UNAVAILABLE: i32 = 66;
