//! Group membership index over the gene pool.

use std::collections::HashSet;

use serde::Serialize;

use crate::schema::Ruleset;

use super::adjacency::Adjacency;
use super::error::{Result, SearchSpaceError};

/// Group id -> member layer ids, both in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupIndex {
    groups: Adjacency,
}

impl GroupIndex {
    /// Index the gene pool of `ruleset`.
    ///
    /// Genes without a group, or with an empty group string, are valid and
    /// left out of every bucket.
    pub fn build(ruleset: &Ruleset) -> Result<Self> {
        let genes = ruleset.gene_pool.as_deref().ok_or_else(|| {
            SearchSpaceError::MalformedRecord("ruleset has no 'gene_pool' collection".to_string())
        })?;

        let mut groups = Adjacency::new();
        let mut seen = HashSet::with_capacity(genes.len());

        for (index, gene) in genes.iter().enumerate() {
            let layer = gene.layer.as_deref().ok_or_else(|| {
                SearchSpaceError::MalformedRecord(format!("gene_pool[{index}] has no layer id"))
            })?;
            if !seen.insert(layer) {
                return Err(SearchSpaceError::MalformedRecord(format!(
                    "gene_pool[{index}] repeats layer id '{layer}'"
                )));
            }
            if let Some(group) = gene.group_id() {
                groups.extend(group, [layer]);
            }
        }

        log::debug!("Group index: {groups:?}");
        Ok(Self { groups })
    }

    /// Member layers of `group`, empty for unknown groups.
    pub fn members(&self, group: &str) -> &[String] {
        self.groups.neighbors(group)
    }

    pub fn contains(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    /// Group ids in first-seen order.
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(group, _)| group)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Gene;

    #[test]
    fn test_build_preserves_order() {
        let ruleset = Ruleset::with_genes(vec![
            Gene::new("C", Some("G2")),
            Gene::new("A", Some("G1")),
            Gene::new("B", Some("G2")),
        ]);
        let index = GroupIndex::build(&ruleset).unwrap();

        assert_eq!(index.group_ids().collect::<Vec<_>>(), ["G2", "G1"]);
        assert_eq!(index.members("G2"), ["C", "B"]);
        assert_eq!(index.members("G1"), ["A"]);
        assert!(index.members("G3").is_empty());
    }

    #[test]
    fn test_ungrouped_layer_allowed() {
        let ruleset = Ruleset::with_genes(vec![Gene::new("A", None), Gene::new("B", Some("G1"))]);
        let index = GroupIndex::build(&ruleset).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.members("G1"), ["B"]);
    }

    #[test]
    fn test_empty_group_string_not_indexed() {
        let ruleset = Ruleset::with_genes(vec![
            Gene::new("A", Some("")),
            Gene::new("B", Some("G1")),
        ]);
        let index = GroupIndex::build(&ruleset).unwrap();
        assert!(!index.contains(""));
        assert_eq!(index.group_ids().collect::<Vec<_>>(), ["G1"]);
    }

    #[test]
    fn test_missing_gene_pool() {
        let err = GroupIndex::build(&Ruleset::default()).unwrap_err();
        assert!(matches!(err, SearchSpaceError::MalformedRecord(_)));
    }

    #[test]
    fn test_gene_without_layer() {
        let ruleset = Ruleset::with_genes(vec![Gene {
            group: Some("G1".to_string()),
            ..Default::default()
        }]);
        assert!(matches!(
            GroupIndex::build(&ruleset),
            Err(SearchSpaceError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_duplicate_layer_rejected() {
        let ruleset = Ruleset::with_genes(vec![
            Gene::new("A", Some("G1")),
            Gene::new("A", Some("G2")),
        ]);
        assert!(matches!(
            GroupIndex::build(&ruleset),
            Err(SearchSpaceError::MalformedRecord(msg)) if msg.contains("'A'")
        ));
    }

    #[test]
    fn test_empty_gene_pool() {
        let index = GroupIndex::build(&Ruleset::with_genes(vec![])).unwrap();
        assert!(index.is_empty());
    }
}
