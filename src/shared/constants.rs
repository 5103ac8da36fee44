/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default number of search suggestions
pub const DEFAULT_SUGGESTION_LIMIT: i64 = 10;

/// Maximum number of search suggestions
pub const MAX_SUGGESTION_LIMIT: i64 = 50;

/// Longest accepted search / location filter value (matches the VARCHAR(100) columns)
pub const MAX_FILTER_LENGTH: u64 = 100;
