//! Case storage.

use hashbrown::HashMap;

use crate::case::CaseRecord;
use crate::error::{RegionError, RegionResult};
use crate::region::InjuryRegion;

/// Storage for case records, keyed by case id.
///
/// Implementations keep cases in insertion order so that aggregation over a
/// repository is deterministic.
pub trait CaseRepository {
    /// Store `case`, replacing any case with the same id in place.
    fn save(&mut self, case: CaseRecord);

    /// Look up a case by id.
    fn get(&self, case_id: &str) -> Option<&CaseRecord>;

    /// Remove and return a case.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::CaseNotFound`] if no case has this id.
    fn remove(&mut self, case_id: &str) -> RegionResult<CaseRecord>;

    /// All cases in insertion order.
    fn cases(&self) -> &[CaseRecord];

    /// Number of stored cases.
    fn len(&self) -> usize {
        self.cases().len()
    }

    /// Whether no cases are stored.
    fn is_empty(&self) -> bool {
        self.cases().is_empty()
    }

    /// Every injury of every case, case by case.
    fn all_injuries(&self) -> impl Iterator<Item = &InjuryRegion> {
        self.cases().iter().flat_map(|case| case.injuries.iter())
    }
}

/// A [`CaseRepository`] held in memory.
///
/// # Example
///
/// ```
/// use injury_region::{CaseRecord, CaseRepository, InMemoryCaseRepository};
///
/// let mut repo = InMemoryCaseRepository::new();
/// repo.save(CaseRecord::new("a"));
/// repo.save(CaseRecord::new("b"));
/// assert_eq!(repo.len(), 2);
/// assert!(repo.get("a").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCaseRepository {
    cases: Vec<CaseRecord>,
    index: HashMap<String, usize>,
}

impl InMemoryCaseRepository {
    /// An empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a case that must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DuplicateCase`] if a case with this id is
    /// already stored.
    pub fn insert_new(&mut self, case: CaseRecord) -> RegionResult<()> {
        if self.index.contains_key(&case.case_id) {
            return Err(RegionError::DuplicateCase {
                case_id: case.case_id,
            });
        }
        self.save(case);
        Ok(())
    }

    /// Mutable access to the injuries of a stored case.
    ///
    /// The case id stays fixed; replace the whole record with
    /// [`save`](CaseRepository::save) or move it with
    /// [`remove`](CaseRepository::remove) to change it.
    pub fn injuries_mut(&mut self, case_id: &str) -> Option<&mut Vec<InjuryRegion>> {
        let &position = self.index.get(case_id)?;
        self.cases.get_mut(position).map(|case| &mut case.injuries)
    }

    /// Remove every case.
    pub fn clear(&mut self) {
        self.cases.clear();
        self.index.clear();
    }
}

impl CaseRepository for InMemoryCaseRepository {
    fn save(&mut self, case: CaseRecord) {
        if let Some(&position) = self.index.get(&case.case_id) {
            self.cases[position] = case;
        } else {
            self.index.insert(case.case_id.clone(), self.cases.len());
            self.cases.push(case);
        }
    }

    fn get(&self, case_id: &str) -> Option<&CaseRecord> {
        let &position = self.index.get(case_id)?;
        self.cases.get(position)
    }

    fn remove(&mut self, case_id: &str) -> RegionResult<CaseRecord> {
        let position = self
            .index
            .remove(case_id)
            .ok_or_else(|| RegionError::CaseNotFound {
                case_id: case_id.to_string(),
            })?;
        let case = self.cases.remove(position);
        for later in self.index.values_mut() {
            if *later > position {
                *later -= 1;
            }
        }
        Ok(case)
    }

    fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }
}

impl FromIterator<CaseRecord> for InMemoryCaseRepository {
    fn from_iter<I: IntoIterator<Item = CaseRecord>>(iter: I) -> Self {
        let mut repo = Self::new();
        for case in iter {
            repo.save(case);
        }
        repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CanonicalPoint, InjuryMetadata, RadiusRegion};

    fn case(id: &str, injuries: usize) -> CaseRecord {
        (0..injuries).fold(CaseRecord::new(id), |case, _| {
            case.with_injury(RadiusRegion::point(
                CanonicalPoint::ORIGIN,
                InjuryMetadata::new(id),
            ))
        })
    }

    #[test]
    fn save_replaces_in_place() {
        let mut repo: InMemoryCaseRepository = [case("a", 1), case("b", 1)].into_iter().collect();
        repo.save(case("a", 3));

        let ids: Vec<_> = repo.cases().iter().map(|c| c.case_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(repo.get("a").unwrap().len(), 3);
    }

    #[test]
    fn insert_new_rejects_duplicates() {
        let mut repo = InMemoryCaseRepository::new();
        repo.insert_new(case("a", 0)).unwrap();
        assert_eq!(
            repo.insert_new(case("a", 2)).unwrap_err(),
            RegionError::DuplicateCase {
                case_id: "a".to_string(),
            }
        );
        assert_eq!(repo.get("a").unwrap().len(), 0);
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut repo: InMemoryCaseRepository =
            [case("a", 1), case("b", 2), case("c", 3)].into_iter().collect();

        let removed = repo.remove("a").unwrap();
        assert_eq!(removed.case_id, "a");
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get("b").unwrap().len(), 2);
        assert_eq!(repo.get("c").unwrap().len(), 3);
        assert!(repo.get("a").is_none());

        assert_eq!(
            repo.remove("a").unwrap_err(),
            RegionError::CaseNotFound {
                case_id: "a".to_string(),
            }
        );
    }

    #[test]
    fn all_injuries_spans_cases() {
        let repo: InMemoryCaseRepository =
            [case("a", 2), case("b", 0), case("c", 1)].into_iter().collect();
        assert_eq!(repo.all_injuries().count(), 3);
    }

    #[test]
    fn injuries_mut_edits_stored_case() {
        let mut repo: InMemoryCaseRepository = std::iter::once(case("a", 2)).collect();
        repo.injuries_mut("a").unwrap().remove(0);
        assert_eq!(repo.get("a").unwrap().len(), 1);
        assert!(repo.injuries_mut("missing").is_none());
        repo.clear();
        assert!(repo.is_empty());
    }

    #[test]
    fn stored_ids_stay_indexed_after_edits() {
        let mut repo: InMemoryCaseRepository = [case("a", 1), case("b", 1)].into_iter().collect();
        repo.injuries_mut("a").unwrap().clear();

        for stored in repo.cases() {
            let found = repo.get(&stored.case_id).unwrap();
            assert_eq!(found.case_id, stored.case_id);
        }
        assert!(repo.get("a").unwrap().is_empty());
        assert_eq!(repo.remove("b").unwrap().case_id, "b");
        assert_eq!(repo.get("a").unwrap().case_id, "a");
    }
}
