//! Error adapter for converting MeridianError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. None of
//! the library's errors carry source spans, so the adapter only supplies
//! error codes and messages.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use meridian::MeridianError;

/// Adapter wrapping a [`MeridianError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a MeridianError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MeridianError::Io(_) => "meridian::io",
            MeridianError::Measure(_) => "meridian::measure",
            MeridianError::Model(_) => "meridian::model",
            MeridianError::Config(_) => "meridian::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            MeridianError::Model(_) => Some(Box::new(
                "diagram descriptions are TOML documents with kind = \"spectrum\" or \"plane\"",
            )),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
