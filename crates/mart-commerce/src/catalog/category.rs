//! Category types for product organization.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// A product category. Categories form a two-level hierarchy: roots and
/// their subcategories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Parent category (None for roots).
    pub parent_id: Option<CategoryId>,
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Sort order within the parent.
    pub position: i32,
}

impl Category {
    /// Check if this is a root category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A root category with its subcategories, for menu rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryNode {
    /// The root category.
    pub category: Category,
    /// Its subcategories, in position order.
    pub subcategories: Vec<Category>,
}

/// Assemble the category hierarchy from a flat list.
///
/// Roots come back in position order, each carrying its subcategories.
/// Orphans (a parent id that matches no root) are dropped.
pub fn build_tree(categories: &[Category]) -> Vec<CategoryNode> {
    let mut roots: Vec<CategoryNode> = categories
        .iter()
        .filter(|c| c.is_root())
        .map(|c| CategoryNode {
            category: c.clone(),
            subcategories: Vec::new(),
        })
        .collect();
    roots.sort_by_key(|n| n.category.position);

    for category in categories.iter().filter(|c| !c.is_root()) {
        let parent_id = category.parent_id.as_ref();
        if let Some(node) = roots
            .iter_mut()
            .find(|n| Some(&n.category.id) == parent_id)
        {
            node.subcategories.push(category.clone());
        }
    }

    for node in &mut roots {
        node.subcategories.sort_by_key(|c| c.position);
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, parent: Option<&str>, position: i32) -> Category {
        Category {
            id: CategoryId::new(id),
            parent_id: parent.map(CategoryId::new),
            name: id.to_string(),
            slug: id.to_string(),
            position,
        }
    }

    #[test]
    fn tree_groups_subcategories_under_roots() {
        let categories = vec![
            category("fashion", None, 2),
            category("electronics", None, 1),
            category("phones", Some("electronics"), 1),
            category("audio", Some("electronics"), 2),
            category("footwear", Some("fashion"), 1),
        ];

        let tree = build_tree(&categories);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].category.id.as_str(), "electronics");
        assert_eq!(tree[0].subcategories.len(), 2);
        assert_eq!(tree[0].subcategories[0].id.as_str(), "phones");
        assert_eq!(tree[1].category.id.as_str(), "fashion");
        assert_eq!(tree[1].subcategories.len(), 1);
    }

    #[test]
    fn orphan_subcategories_are_dropped() {
        let categories = vec![
            category("electronics", None, 1),
            category("lost", Some("no-such-root"), 1),
        ];

        let tree = build_tree(&categories);

        assert_eq!(tree.len(), 1);
        assert!(tree[0].subcategories.is_empty());
    }

    #[test]
    fn empty_input_builds_empty_tree() {
        assert!(build_tree(&[]).is_empty());
    }
}
