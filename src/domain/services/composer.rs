//! Source Composer
//!
//! Merges a primary fragment and its imported fragments into one synthetic
//! document, recording a [`RangeMap`] entry for every block of appended lines.
//!
//! Layout of the composed document:
//!
//! ```text
//! <import headers of imported fragments>      (HeaderPolicy::Hoist only)
//! #line 1 "<primary>"
//! <primary fragment, unsplit>
//! #line <header lines + 1> "<imported>"         (per imported fragment)
//! <imported fragment body>
//! ```

use std::path::Path;

use crate::domain::entities::{CompositionUnit, Fragment};
use crate::domain::value_objects::{HeaderPolicy, PositionMarker, RangeMap};
use crate::error::MergeResult;

/// A composed document and the index mapping it back to its fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    pub unit: CompositionUnit,
    pub range_map: RangeMap,
}

impl Composition {
    fn add_code<S: Into<String>>(
        &mut self,
        file: &Path,
        lines: impl IntoIterator<Item = S>,
        line_offset: usize,
    ) {
        let start = self.unit.len();
        self.unit.extend(lines);
        let end = self.unit.len();
        self.range_map.record(start, end, file, line_offset);
    }

    fn add_marker(&mut self, marker: PositionMarker) {
        self.unit.push(marker.to_string());
    }
}

/// Compose `primary` and `imported` (in input order) into one document.
///
/// Fails with a parse error if any imported fragment cannot be split. The
/// primary fragment is never split.
pub fn compose(
    primary: &Fragment,
    imported: &[Fragment],
    header_policy: HeaderPolicy,
) -> MergeResult<Composition> {
    let mut composition = Composition::default();

    let mut bodies = Vec::with_capacity(imported.len());
    for fragment in imported {
        let split = fragment.split()?;
        if header_policy == HeaderPolicy::Hoist {
            composition.add_code(fragment.path(), split.header_lines(), 0);
        }
        bodies.push((fragment, split));
    }

    composition.add_marker(PositionMarker::new(1, primary.path()));
    composition.add_code(primary.path(), primary.lines(), 0);

    for (fragment, split) in bodies {
        composition.add_marker(PositionMarker::new(
            split.header_line_count + 1,
            fragment.path(),
        ));
        composition.add_code(
            fragment.path(),
            split.aligned_body_lines(),
            split.header_line_count,
        );
    }

    Ok(composition)
}
