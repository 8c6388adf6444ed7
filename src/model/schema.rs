//! The ordered feature list a model was fit on.

use std::collections::HashMap;

use crate::error::{Result, ScoreError};

/// Ordered, duplicate-free list of encoded feature names.
///
/// Column `i` of every encoded batch is fed to coefficient `i` of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl TrainingSchema {
    /// Validate and index a column list.
    ///
    /// Empty lists, blank names and duplicates cannot be satisfied by
    /// reconciliation and are rejected.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(ScoreError::SchemaMismatch("training schema is empty".to_string()));
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ScoreError::SchemaMismatch(format!("blank column name at position {idx}")));
            }
            if index.insert(name.clone(), idx).is_some() {
                return Err(ScoreError::SchemaMismatch(format!("duplicate column `{name}`")));
            }
        }

        Ok(Self { columns, index })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn positions_follow_input_order() {
        let schema = TrainingSchema::new(names(&["LotArea", "TotalSF", "MSZoning_RL"])).unwrap();
        assert_eq!(schema.position("TotalSF"), Some(1));
        assert_eq!(schema.position("MSZoning_RM"), None);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn unsatisfiable_schemas_are_rejected() {
        assert!(matches!(TrainingSchema::new(vec![]), Err(ScoreError::SchemaMismatch(_))));
        assert!(matches!(
            TrainingSchema::new(names(&["LotArea", "LotArea"])),
            Err(ScoreError::SchemaMismatch(_))
        ));
        assert!(matches!(
            TrainingSchema::new(names(&["LotArea", " "])),
            Err(ScoreError::SchemaMismatch(_))
        ));
    }
}
