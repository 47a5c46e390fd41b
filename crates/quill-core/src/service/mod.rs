//! Business services over the repository port.

mod post_service;

pub use post_service::{MAX_PAGE_LIMIT, PostPage, PostService};
