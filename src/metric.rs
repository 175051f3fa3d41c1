use crate::error::AveragerError;
use crate::group_key::GroupKey;
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Count and mean of one finalized series. Only `Averager::finalize` builds
/// these, so `count` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregationResult {
    count: u64,
    average: f64,
}

impl AggregationResult {
    pub(crate) fn new(count: u64, average: f64) -> Self {
        AggregationResult { count, average }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn average(&self) -> f64 {
        self.average
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ResultTable {
    results: BTreeMap<GroupKey, AggregationResult>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        key: GroupKey,
        result: AggregationResult,
    ) -> Result<(), AveragerError> {
        match self.results.entry(key) {
            btree_map::Entry::Occupied(entry) => {
                Err(AveragerError::DuplicateKey(entry.key().to_string()))
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(result);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &GroupKey) -> Option<&AggregationResult> {
        self.results.get(key)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &AggregationResult)> {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AveragerError;
    use crate::group_key::GroupKey;
    use crate::metric::{AggregationResult, ResultTable};

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut table = ResultTable::new();
        table
            .insert(GroupKey::new("boys", "kg"), AggregationResult::new(6, 54.0))
            .unwrap();
        let result = table.insert(GroupKey::new("boys", "kg"), AggregationResult::new(1, 1.0));

        assert_eq!(
            result.err().unwrap(),
            AveragerError::DuplicateKey("boys;kg".to_string())
        );
        assert_eq!(
            table.get(&GroupKey::new("boys", "kg")),
            Some(&AggregationResult::new(6, 54.0))
        );
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut table = ResultTable::new();
        for (group, unit) in &[("girls", "m"), ("boys", "m"), ("boys", "kg")] {
            table
                .insert(GroupKey::new(*group, *unit), AggregationResult::new(1, 1.0))
                .unwrap();
        }
        let keys: Vec<String> = table.iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(keys, ["boys;kg", "boys;m", "girls;m"]);
        assert_eq!(table.len(), 3);
    }
}
