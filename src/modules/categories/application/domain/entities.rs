use std::fmt;

use uuid::Uuid;

/// A category without a parent; the root level of the two-level tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelCategory {
    pub id: Uuid,
    pub name: String,
    pub display_order: i16,
}

/// A category with a parent; the level listings are filed under.
///
/// Both levels live in one `categories` table; the two structs are the two
/// read views over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcategory {
    pub id: Uuid,
    pub name: String,
    pub display_order: i16,
    pub parent: TopLevelCategory,
}

impl Subcategory {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.parent.name, self.name)
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.parent.name, self.name)
    }
}

/// (display_order, name) ordering of the top-level view.
pub fn sort_top_level(categories: &mut [TopLevelCategory]) {
    categories.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Sub view ordering: parent first (order, name), then the subcategory's own
/// (order, name).
pub fn sort_subcategories(subcategories: &mut [Subcategory]) {
    subcategories.sort_by(|a, b| {
        a.parent
            .display_order
            .cmp(&b.parent.display_order)
            .then_with(|| a.parent.name.cmp(&b.parent.name))
            .then_with(|| a.display_order.cmp(&b.display_order))
            .then_with(|| a.name.cmp(&b.name))
    });
}
