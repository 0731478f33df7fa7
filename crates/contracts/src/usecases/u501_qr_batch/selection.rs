use serde::{Deserialize, Serialize};

use crate::domain::a001_product::ProductId;

/// Products picked for a QR batch, deduplicated in pick order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<ProductId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            if !selection.contains(id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<ProductId> {
        raw.iter().copied().map(ProductId).collect()
    }

    #[test]
    fn test_empty_selection() {
        let selection = Selection::from_ids(Vec::new());
        assert!(selection.is_empty());
        assert!(!selection.contains(ProductId(1)));
    }

    #[test]
    fn test_from_ids_dedups() {
        let selection = Selection::from_ids(ids(&[3, 3, 1]));
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(ProductId(1)));
        assert_eq!(serde_json::to_string(&selection).unwrap(), "[3,1]");
    }
}
