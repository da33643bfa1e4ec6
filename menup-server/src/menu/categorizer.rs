//! Menu Categorizer
//!
//! 纯函数：把无序的菜单条目分组为有序的分类区块，供公共菜单渲染。
//!
//! Grouping key per item: specials go under [`SPECIAL_CATEGORY`] regardless
//! of their stored category; an empty category falls back to
//! [`FALLBACK_CATEGORY`]. Known categories render in [`CATEGORY_ORDER`],
//! custom ones after them in first-encountered input order. Item order
//! inside a section is the input order (stable).

use serde::Serialize;

use crate::db::models::MenuItem;

/// Fixed preference order for well-known categories
pub const CATEGORY_ORDER: [&str; 7] = [
    "Today's Special",
    "Mains",
    "Pastries",
    "Pizza",
    "Desserts",
    "Drinks",
    "Beverages",
];

/// Display category for items flagged `is_special`
pub const SPECIAL_CATEGORY: &str = "Today's Special";

/// Display category for items without one
pub const FALLBACK_CATEGORY: &str = "Others";

/// One rendered section of the menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSection {
    pub category: String,
    pub items: Vec<MenuItem>,
}

/// Display grouping key for one item. Never mutates the stored category.
pub fn group_key(item: &MenuItem) -> &str {
    if item.is_special {
        SPECIAL_CATEGORY
    } else if item.category.is_empty() {
        FALLBACK_CATEGORY
    } else {
        &item.category
    }
}

/// Group items into ordered sections.
///
/// Deterministic: the same input list in the same order always produces the
/// same sections. An empty input yields an empty section list.
pub fn categorize(items: Vec<MenuItem>) -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = Vec::new();

    for item in items {
        let key = group_key(&item).to_string();
        match sections.iter_mut().find(|s| s.category == key) {
            Some(section) => section.items.push(item),
            None => sections.push(MenuSection {
                category: key,
                items: vec![item],
            }),
        }
    }

    // Stable sort: preferred categories first by their fixed position,
    // everything else keeps first-encountered order at the end.
    sections.sort_by_key(|s| {
        CATEGORY_ORDER
            .iter()
            .position(|c| *c == s.category)
            .unwrap_or(usize::MAX)
    });

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use surrealdb::RecordId;

    fn item(name: &str, category: &str, is_special: bool) -> MenuItem {
        let mut item = MenuItem::new(
            RecordId::from_table_key("restaurant", "r1"),
            name.to_string(),
            Decimal::new(500, 2),
            0,
        );
        item.category = category.to_string();
        item.is_special = is_special;
        item
    }

    fn names(section: &MenuSection) -> Vec<&str> {
        section.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        assert!(categorize(vec![]).is_empty());
    }

    #[test]
    fn test_special_overrides_category() {
        let sections = categorize(vec![item("Chef Pick", "Mains", true)]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].category, SPECIAL_CATEGORY);
        // the stored category is untouched
        assert_eq!(sections[0].items[0].category, "Mains");
    }

    #[test]
    fn test_empty_category_falls_back_to_others() {
        let sections = categorize(vec![item("Mystery", "", false)]);
        assert_eq!(sections[0].category, FALLBACK_CATEGORY);
    }

    #[test]
    fn test_preference_order_then_encounter_order() {
        let sections = categorize(vec![
            item("Tea", "Drinks", false),
            item("Burger", "Mains", false),
            item("Thing", "CustomCat", false),
            item("Widget", "AnotherCat", false),
        ]);
        let order: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["Mains", "Drinks", "CustomCat", "AnotherCat"]);
    }

    #[test]
    fn test_within_section_order_is_stable() {
        let sections = categorize(vec![
            item("Tea", "Drinks", false),
            item("Coffee", "Drinks", false),
            item("Juice", "Drinks", false),
        ]);
        assert_eq!(names(&sections[0]), vec!["Tea", "Coffee", "Juice"]);
    }

    #[test]
    fn test_spec_scenario() {
        // Tea/Burger/Chef Pick: special first, then Mains, then Drinks
        let sections = categorize(vec![
            item("Tea", "Drinks", false),
            item("Burger", "Mains", false),
            item("Chef Pick", "Mains", true),
        ]);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].category, "Today's Special");
        assert_eq!(names(&sections[0]), vec!["Chef Pick"]);
        assert_eq!(sections[1].category, "Mains");
        assert_eq!(names(&sections[1]), vec!["Burger"]);
        assert_eq!(sections[2].category, "Drinks");
        assert_eq!(names(&sections[2]), vec!["Tea"]);
    }

    #[test]
    fn test_determinism() {
        let input = vec![
            item("Tea", "Drinks", false),
            item("Croissant", "Pastries", false),
            item("Chef Pick", "Mains", true),
            item("Mystery", "", false),
            item("Thing", "CustomCat", false),
        ];
        let first = categorize(input.clone());
        let second = categorize(input);
        assert_eq!(first, second);
    }
}
