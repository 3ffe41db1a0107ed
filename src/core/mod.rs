//! Core types - pure abstractions shared across the codebase.

mod site_url;
mod slug;

pub use site_url::{
    BaseUrlSource, DEFAULT_BASE_URL, ENV_PLATFORM_HOSTS, ENV_SITE_URL, SiteEnv, resolve_base_url,
    resolve_base_url_with,
};
pub use slug::Slug;
