//! Config loading errors and validation findings.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream, Style};
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Reasons a config file could not be turned into a usable [`SiteConfig`].
///
/// [`SiteConfig`]: crate::config::SiteConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),

    #[error("config is not valid TOML")]
    Toml(#[from] toml::de::Error),

    /// Parsed fine, but one or more values are unusable.
    /// Carries no `source()`: the findings are the whole message.
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// One finding about one config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    /// Suggested fix, shown after the message.
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    fn new(field: FieldPath, message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint,
        }
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.as_str();
        write!(
            f,
            "{}: {}",
            field.if_supports_color(Stream::Stderr, |s| s.cyan()),
            self.message
        )?;
        match &self.hint {
            Some(hint) => {
                let hint = format!("({hint})");
                write!(f, " {}", hint.if_supports_color(Stream::Stderr, |s| s.dimmed()))
            }
            None => Ok(()),
        }
    }
}

/// Findings from validating every section.
///
/// Errors make [`into_result`](Self::into_result) fail; warnings are only
/// printed. `len`/`is_empty` count errors.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message, None));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        let hint = Some(hint.into());
        self.errors.push(ConfigDiagnostic::new(field, message, hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message, None));
    }

    pub fn print_warnings(&self) {
        for warning in &self.warnings {
            crate::log!("warning"; "{}", warning);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let title = "invalid configuration";
        write!(
            f,
            "{} ({} problem{})",
            title.if_supports_color(Stream::Stderr, |s| s.style(Style::new().red().bold())),
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for diagnostic in &self.errors {
            write!(f, "\n  - {diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_file() {
        let err = ConfigError::Read(
            PathBuf::from("whenisdue.toml"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot read config `whenisdue.toml`");
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("build.content"), "missing");
        assert!(diag.is_empty());
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_errors_listed_with_hints() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(
            FieldPath::new("site.fallback_url"),
            "URL must not end with `/`",
            "use \"https://whenisdue.com\"",
        );
        diag.error(FieldPath::new("og.width"), "image width must be greater than 0");

        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(
            err.to_string(),
            "invalid configuration (2 problems)\n  \
             - site.fallback_url: URL must not end with `/` (use \"https://whenisdue.com\")\n  \
             - og.width: image width must be greater than 0"
        );
    }
}
