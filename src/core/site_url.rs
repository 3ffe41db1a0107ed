//! Site base URL resolution.
//!
//! The base URL is the scheme+host origin every canonical and social-card
//! URL is built from. Candidates are checked in priority order:
//!
//! | Priority | Source                                           | Used as            |
//! |----------|--------------------------------------------------|--------------------|
//! | 1        | `NEXT_PUBLIC_SITE_URL` (or `--site-url`)         | verbatim           |
//! | 2        | `NEXT_PUBLIC_VERCEL_URL`, then `VERCEL_URL`      | `https://` + host  |
//! | 3        | `[site] fallback_url` (`https://whenisdue.com`)  | verbatim           |
//!
//! Environment access is captured once into [`SiteEnv`] so resolution stays a
//! pure function of its inputs.

/// Explicit public site URL override.
pub const ENV_SITE_URL: &str = "NEXT_PUBLIC_SITE_URL";

/// Deployment platform hostnames (scheme-less), checked in order.
pub const ENV_PLATFORM_HOSTS: [&str; 2] = ["NEXT_PUBLIC_VERCEL_URL", "VERCEL_URL"];

/// Production origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://whenisdue.com";

/// Candidate sources for the base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteEnv {
    /// Full origin override, used verbatim.
    pub override_url: Option<String>,
    /// Platform-provided hostname without scheme.
    pub platform_hostname: Option<String>,
}

impl SiteEnv {
    /// Capture the relevant variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset, so `VERCEL_URL=""` falls through
    /// to the next candidate.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            override_url: get(ENV_SITE_URL),
            platform_hostname: ENV_PLATFORM_HOSTS.iter().find_map(|key| get(*key)),
        }
    }

    /// Replace the override (the `--site-url` flag wins over the environment).
    pub fn with_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.override_url = Some(url);
        }
        self
    }

    /// Which source [`resolve_base_url`] will pick.
    pub fn source(&self) -> BaseUrlSource {
        if non_empty(&self.override_url).is_some() {
            BaseUrlSource::Override
        } else if non_empty(&self.platform_hostname).is_some() {
            BaseUrlSource::PlatformHost
        } else {
            BaseUrlSource::Fallback
        }
    }
}

/// Where a resolved base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Override,
    PlatformHost,
    Fallback,
}

impl std::fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Override => ENV_SITE_URL,
            Self::PlatformHost => "platform hostname",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Resolve the base URL using the built-in fallback origin.
#[inline]
pub fn resolve_base_url(env: &SiteEnv) -> String {
    resolve_base_url_with(env, DEFAULT_BASE_URL)
}

/// Resolve the base URL with a caller-supplied fallback origin.
///
/// The override is not validated: whatever the operator put there is what
/// pages are built with. `check` reports malformed values separately.
pub fn resolve_base_url_with(env: &SiteEnv, fallback: &str) -> String {
    if let Some(url) = non_empty(&env.override_url) {
        return url.to_string();
    }

    if let Some(host) = non_empty(&env.platform_hostname) {
        return format!("https://{host}");
    }

    fallback.to_string()
}

#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
