//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits};

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> usize {
    MAX_PAGE_SIZE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server and its database.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Page size applied when a request omits `pageSize`.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Largest `pageSize` a request may ask for.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl ServerConfig {
    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_size: self.default_page_size,
            max_size: self.max_page_size,
        }
    }
}
