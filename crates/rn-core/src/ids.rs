//! Strongly typed city identifier.
//!
//! City numbers in the data files are **1-based** and dense: the city
//! numbered `k` sits at position `k - 1` in the network's city sequence and
//! owns row/column `k - 1` of the weight matrix.  `CityId` keeps that
//! convention in one place — store the 1-based number, convert through
//! [`index`](CityId::index) when touching storage.

use std::fmt;

/// 1-based city number as it appears in the city file.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityId(pub u32);

impl CityId {
    /// Sentinel meaning "no valid city" — used by placeholder edges.
    pub const INVALID: CityId = CityId(u32::MAX);

    /// 0-based storage index (`number - 1`).
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Inverse of [`index`](Self::index): storage index → 1-based number.
    #[inline(always)]
    pub fn from_index(i: usize) -> CityId {
        CityId(i as u32 + 1)
    }
}

impl Default for CityId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}
