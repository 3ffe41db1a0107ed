//! Configuration section definitions.
//!
//! Each module corresponds to a section in `whenisdue.toml`:
//!
//! | Module  | TOML Section | Purpose                                   |
//! |---------|--------------|-------------------------------------------|
//! | `build` | `[build]`    | Content/output paths, minification        |
//! | `og`    | `[og]`       | Social-card manifest and tag defaults     |
//! | `site`  | `[site]`     | Site name, fallback base URL, language    |

mod build;
mod og;
mod site;

pub use build::BuildSection;
pub use og::OgSection;
pub use site::{SiteSection, check_origin};
