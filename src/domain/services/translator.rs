//! Diagnostic Translator
//!
//! Rewrites back-end diagnostics into original source coordinates.
//!
//! Convention: the back end reports zero-based lines and columns; translated
//! diagnostics are one-based in both.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Diagnostic, Severity, SourceLocation};
use crate::domain::ports::{RawDiagnostic, RawLocation};
use crate::domain::value_objects::RangeMap;

/// Translates diagnostics reported against one composed document.
pub struct Translator<'a> {
    range_map: &'a RangeMap,
    synthetic_path: &'a Path,
    fragments: &'a [PathBuf],
}

impl<'a> Translator<'a> {
    pub fn new(range_map: &'a RangeMap, synthetic_path: &'a Path, fragments: &'a [PathBuf]) -> Self {
        Self {
            range_map,
            synthetic_path,
            fragments,
        }
    }

    /// Translate every diagnostic into a new list, keeping the received order.
    pub fn translate_all<'d>(
        &self,
        diagnostics: impl IntoIterator<Item = &'d RawDiagnostic>,
    ) -> Vec<Diagnostic> {
        diagnostics.into_iter().map(|d| self.translate(d)).collect()
    }

    pub fn translate(&self, raw: &RawDiagnostic) -> Diagnostic {
        let severity = if raw.warning_as_error {
            Severity::Error
        } else {
            raw.severity
        };
        Diagnostic {
            severity,
            id: raw.id.clone(),
            message: raw.message.clone(),
            location: raw.location.as_ref().map(|loc| self.translate_location(loc)),
        }
    }

    fn translate_location(&self, loc: &RawLocation) -> SourceLocation {
        let column = loc.column + 1;

        if self.is_synthetic(&loc.path) {
            return match self.range_map.translate(loc.line) {
                Some((file, line)) => SourceLocation::new(file, line + 1, column),
                None => SourceLocation::new(self.synthetic_path, loc.line + 1, column),
            };
        }

        SourceLocation::new(self.resolve_reported_file(&loc.path), loc.line + 1, column)
    }

    fn is_synthetic(&self, reported: &str) -> bool {
        reported.is_empty() || Path::new(reported) == self.synthetic_path
    }

    /// Compilers that record bare file names get the full fragment path back.
    fn resolve_reported_file(&self, reported: &str) -> PathBuf {
        let reported = Path::new(reported);
        if reported.is_absolute() {
            return reported.to_path_buf();
        }
        self.fragments
            .iter()
            .find(|f| f.ends_with(reported))
            .cloned()
            .unwrap_or_else(|| reported.to_path_buf())
    }
}
