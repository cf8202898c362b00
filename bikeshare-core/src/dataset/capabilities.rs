use serde::{Deserialize, Serialize};

/// records which optional columns carry data in a loaded dataset. computed
/// once at load time and carried alongside every collection derived from it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatasetCapabilities {
    /// the gender column exists and holds at least one value
    pub has_gender: bool,
    /// the birth year column exists and holds at least one value
    pub has_birth_year: bool,
}
