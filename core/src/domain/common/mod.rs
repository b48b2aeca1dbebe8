use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use entities::app_errors::CoreError;

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct LibrisConfig {
    pub pagination: PaginationConfig,
    pub search_limit: usize,
    /// JSON fixture used to seed the store, the built-in one when `None`.
    pub fixtures_path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

pub const DEFAULT_SEARCH_LIMIT: usize = 20;

impl LibrisConfig {
    pub fn new(pagination: PaginationConfig, search_limit: usize) -> Self {
        Self {
            pagination,
            search_limit,
            fixtures_path: None,
        }
    }

    pub fn with_fixtures_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixtures_path = Some(path.into());
        self
    }

    /// Search limit with the default applied when left at zero.
    pub fn effective_search_limit(&self) -> usize {
        match self.search_limit {
            0 => DEFAULT_SEARCH_LIMIT,
            limit => limit,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Trimmed `value`, or a validation error naming `field` when blank.
pub fn required(value: &str, field: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_search_limit_falls_back_to_default() {
        let config = LibrisConfig::default();
        assert_eq!(config.effective_search_limit(), DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.pagination.default_page_size, 10);

        let config = LibrisConfig::new(PaginationConfig::default(), 5);
        assert_eq!(config.effective_search_limit(), 5);
    }

    #[test]
    fn test_uuid_v7_is_versioned() {
        assert_eq!(generate_uuid_v7().get_version_num(), 7);
    }
}
