//! Header policy value object

use serde::{Deserialize, Serialize};

/// What the composer does with the import declarations of imported fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPolicy {
    /// Hoist them to the top of the synthetic document
    #[default]
    Hoist,
    /// Drop them; the back end resolves imports through the reference set
    Drop,
}
