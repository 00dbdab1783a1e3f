//! Category repository.

use mart_commerce::catalog::{build_tree, Category, CategoryNode};
use mart_commerce::CategoryId;

use crate::{seed, DataError};

/// Read access to the category hierarchy.
#[derive(Debug)]
pub struct CategoryRepository {
    categories: Vec<Category>,
}

impl CategoryRepository {
    /// Load the embedded seed categories.
    pub fn with_seed_data() -> Result<Self, DataError> {
        Self::from_seed_json(seed::CATEGORIES_JSON)
    }

    /// Load categories from seed JSON.
    pub fn from_seed_json(json: &str) -> Result<Self, DataError> {
        let categories = seed::load_categories(json)?;
        Ok(Self { categories })
    }

    /// All categories, flat.
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn get(&self, id: &CategoryId) -> Result<&Category, DataError> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| DataError::CategoryNotFound(id.clone()))
    }

    /// Direct subcategories of a category, in position order.
    pub fn subcategories(&self, parent_id: &CategoryId) -> Vec<&Category> {
        let mut subs: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| c.parent_id.as_ref() == Some(parent_id))
            .collect();
        subs.sort_by_key(|c| c.position);
        subs
    }

    /// The full hierarchy: roots with nested subcategories.
    pub fn hierarchy(&self) -> Vec<CategoryNode> {
        build_tree(&self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> CategoryRepository {
        CategoryRepository::with_seed_data().unwrap()
    }

    #[test]
    fn get_known_category() {
        let repo = repo();
        let category = repo.get(&CategoryId::new("grocery")).unwrap();
        assert!(category.is_root());
    }

    #[test]
    fn get_unknown_category_is_not_found() {
        let repo = repo();
        let err = repo.get(&CategoryId::new("toys")).unwrap_err();
        assert!(matches!(err, DataError::CategoryNotFound(_)));
    }

    #[test]
    fn subcategories_are_ordered_by_position() {
        let repo = repo();
        let subs = repo.subcategories(&CategoryId::new("electronics"));

        let ids: Vec<&str> = subs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["phones", "audio", "computers"]);
    }

    #[test]
    fn hierarchy_has_roots_in_position_order() {
        let repo = repo();
        let tree = repo.hierarchy();

        let roots: Vec<&str> = tree.iter().map(|n| n.category.id.as_str()).collect();
        assert_eq!(roots, vec!["electronics", "fashion", "grocery", "home"]);

        let electronics = &tree[0];
        assert_eq!(electronics.subcategories.len(), 3);
    }
}
