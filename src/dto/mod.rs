//! Request and response shapes of the HTTP API.
//!
//! Query parameters are validated with `validator` and converted into search
//! criteria; responses pair a page of rows with [`PageInfo`].

use crate::domain::types::ImageUrl;

pub mod animal;
pub mod recruitment;

pub use crate::pagination::PageInfo;

/// Thumbnail url of a listing; logs and returns `None` when there is none.
pub(crate) fn thumbnail_url(thumbnail: Option<&ImageUrl>, owner: &str) -> Option<String> {
    match thumbnail {
        Some(url) => Some(url.as_str().to_string()),
        None => {
            log::warn!("{owner} has no images");
            None
        }
    }
}
