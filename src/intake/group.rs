//! Grouping classified assets into projects

use std::collections::HashMap;

use super::project::ClassifiedAsset;

/// Buckets assets by grouping key.
///
/// Keys keep the order in which they were first seen and assets keep input
/// order within their bucket.
#[derive(Debug, Default)]
pub struct ProjectGrouper {
    positions: HashMap<String, usize>,
    groups: Vec<(String, Vec<ClassifiedAsset>)>,
}

impl ProjectGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group_key: String, asset: ClassifiedAsset) {
        match self.positions.get(&group_key) {
            Some(&position) => self.groups[position].1.push(asset),
            None => {
                self.positions.insert(group_key.clone(), self.groups.len());
                self.groups.push((group_key, vec![asset]));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Finish grouping, largest groups first.
    ///
    /// The sort is stable, so equally sized groups stay in discovery order.
    pub fn into_groups(self) -> Vec<(String, Vec<ClassifiedAsset>)> {
        let mut groups = self.groups;
        groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::classify::AssetType;
    use pretty_assertions::assert_eq;

    fn asset(filename: &str) -> ClassifiedAsset {
        ClassifiedAsset {
            filename: filename.to_string(),
            extension: String::new(),
            size_bytes: 0,
            asset_type: AssetType::Other,
            is_primary: false,
            source_index: 0,
        }
    }

    fn layout(groups: &[(String, Vec<ClassifiedAsset>)]) -> Vec<(String, Vec<String>)> {
        groups
            .iter()
            .map(|(key, assets)| {
                (
                    key.clone(),
                    assets.iter().map(|a| a.filename.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_groups_keep_input_order() {
        let mut grouper = ProjectGrouper::new();
        grouper.push("a".to_string(), asset("a1"));
        grouper.push("b".to_string(), asset("b1"));
        grouper.push("a".to_string(), asset("a2"));
        assert_eq!(grouper.len(), 2);

        assert_eq!(
            layout(&grouper.into_groups()),
            vec![
                ("a".to_string(), vec!["a1".to_string(), "a2".to_string()]),
                ("b".to_string(), vec!["b1".to_string()]),
            ]
        );
    }

    #[test]
    fn test_larger_groups_first_ties_stable() {
        let mut grouper = ProjectGrouper::new();
        grouper.push("solo".to_string(), asset("s1"));
        grouper.push("pair".to_string(), asset("p1"));
        grouper.push("other".to_string(), asset("o1"));
        grouper.push("pair".to_string(), asset("p2"));

        let keys: Vec<String> = grouper.into_groups().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["pair", "solo", "other"]);
    }

    #[test]
    fn test_empty() {
        let grouper = ProjectGrouper::new();
        assert!(grouper.is_empty());
        assert!(grouper.into_groups().is_empty());
    }
}
