/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "TextCompare";
pub const APP_NAME: &str = "text-compare";

/// Tokens scanned on the opposite side when two tokens disagree
pub const DEFAULT_LOOKAHEAD: usize = 10;

// Report naming
pub const REPORT_FILE_PREFIX: &str = "text-comparison";
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const FALLBACK_DATA_DIR: &str = "data";
