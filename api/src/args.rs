use std::path::PathBuf;

use clap::Parser;
use libris_core::domain::common::{DEFAULT_SEARCH_LIMIT, LibrisConfig, PaginationConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "libris", about = "Library catalog and social feed API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// JSON fixture used to seed the store. The built-in fixture is used when absent.
    #[arg(long = "fixtures-path", env = "LIBRIS_FIXTURES_PATH")]
    pub fixtures_path: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `tracing` filter directive, e.g. `info,libris_core=debug`.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct QueryArgs {
    #[arg(long = "default-page-size", env = "DEFAULT_PAGE_SIZE", default_value_t = 10)]
    pub default_page_size: usize,

    #[arg(long = "max-page-size", env = "MAX_PAGE_SIZE", default_value_t = 100)]
    pub max_page_size: usize,

    #[arg(long = "search-limit", env = "SEARCH_LIMIT", default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub search_limit: usize,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 3333,
                root_path: String::new(),
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
            query: QueryArgs {
                default_page_size: 10,
                max_page_size: 100,
                search_limit: DEFAULT_SEARCH_LIMIT,
            },
            fixtures_path: None,
        }
    }
}

impl From<Args> for LibrisConfig {
    fn from(args: Args) -> Self {
        LibrisConfig {
            pagination: PaginationConfig {
                default_page_size: args.query.default_page_size,
                max_page_size: args.query.max_page_size,
            },
            search_limit: args.query.search_limit,
            fixtures_path: args.fixtures_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_query_defaults() {
        let args = Args::parse_from([
            "libris",
            "--default-page-size",
            "5",
            "--max-page-size",
            "20",
            "--fixtures-path",
            "/tmp/library.json",
        ]);
        let config = LibrisConfig::from(args);

        assert_eq!(config.pagination.default_page_size, 5);
        assert_eq!(config.pagination.max_page_size, 20);
        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.fixtures_path, Some(PathBuf::from("/tmp/library.json")));
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "libris",
            "--allowed-origins",
            "https://a.example,https://b.example",
        ]);
        assert_eq!(
            args.server.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
