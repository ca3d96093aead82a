//! Case records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, RegionResult};
use crate::region::InjuryRegion;

/// The injuries recorded for one casualty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CaseRecord {
    /// Unique case id.
    pub case_id: String,

    /// Injuries in the order they were recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub injuries: Vec<InjuryRegion>,
}

impl CaseRecord {
    /// A case with no injuries.
    #[must_use]
    pub fn new(case_id: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            injuries: Vec::new(),
        }
    }

    /// Builder form of [`push_injury`](Self::push_injury).
    #[must_use]
    pub fn with_injury(mut self, injury: impl Into<InjuryRegion>) -> Self {
        self.injuries.push(injury.into());
        self
    }

    /// Append an injury and return its index.
    pub fn push_injury(&mut self, injury: impl Into<InjuryRegion>) -> usize {
        self.injuries.push(injury.into());
        self.injuries.len() - 1
    }

    /// Remove the injury at `index`, shifting later injuries down.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InjuryIndexOutOfRange`] if `index` is past the end.
    pub fn remove_injury(&mut self, index: usize) -> RegionResult<InjuryRegion> {
        if index >= self.injuries.len() {
            return Err(RegionError::InjuryIndexOutOfRange {
                index,
                len: self.injuries.len(),
            });
        }
        Ok(self.injuries.remove(index))
    }

    /// Number of injuries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.injuries.len()
    }

    /// Whether the case has no injuries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.injuries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CanonicalPoint, InjuryMetadata, RadiusRegion};

    fn injury(kind: &str) -> RadiusRegion {
        RadiusRegion::point(CanonicalPoint::ORIGIN, InjuryMetadata::new(kind))
    }

    #[test]
    fn push_and_remove_by_index() {
        let mut case = CaseRecord::new("c-1").with_injury(injury("a"));
        assert_eq!(case.push_injury(injury("b")), 1);
        assert_eq!(case.push_injury(injury("c")), 2);

        let removed = case.remove_injury(1).unwrap();
        assert_eq!(removed.metadata().injury_type, "b");
        let kinds: Vec<_> = case
            .injuries
            .iter()
            .map(|i| i.metadata().injury_type.as_str())
            .collect();
        assert_eq!(kinds, ["a", "c"]);
    }

    #[test]
    fn remove_out_of_range() {
        let mut case = CaseRecord::new("c-1");
        assert_eq!(
            case.remove_injury(0).unwrap_err(),
            RegionError::InjuryIndexOutOfRange { index: 0, len: 0 }
        );
        assert!(case.is_empty());
    }
}
