//! The menu collection.
//!
//! [`MenuStore`] owns every dish on offer, in the order the dishes were added.
//! It performs no validation of its own: a [`NewMenuItem`] can only be built
//! from already-validated fields (see [`MenuItemForm`](crate::MenuItemForm)).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{Category, Description, DishName, IdSequence, MenuItemId, Price};

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: DishName,
    pub price: Price,
    pub category: Category,
    pub description: Description,
}

/// Create menu item payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: DishName,
    pub price: Price,
    pub category: Category,
    pub description: Description,
}

impl NewMenuItem {
    fn into_item(self, id: MenuItemId) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            description: self.description,
        }
    }
}

/// Ordered, in-memory collection of menu items.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    ids: IdSequence,
}

impl MenuStore {
    /// Create an empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a menu pre-populated with the house dishes.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for item in crate::seed::seed_items() {
            store.add(item);
        }
        store
    }

    /// Append an item to the end of the menu and return its new ID.
    pub fn add(&mut self, item: NewMenuItem) -> MenuItemId {
        let id = self.ids.next_menu_item();
        debug!(%id, name = %item.name, category = %item.category, "menu item added");
        self.items.push(item.into_item(id));
        id
    }

    /// Remove the item with the given ID.
    ///
    /// Returns `None` without touching the menu if no such item exists.
    pub fn remove(&mut self, id: MenuItemId) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        debug!(%id, name = %removed.name, "menu item removed");
        Some(removed)
    }

    /// Remove the first item whose name equals `name`.
    ///
    /// Prefer [`MenuStore::remove`]; names are not unique.
    pub fn remove_by_name(&mut self, name: &str) -> Option<MenuItem> {
        let id = self.find_by_name(name)?.id;
        self.remove(id)
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up the first item with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == *name)
    }

    /// All items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items in one category, in insertion order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Number of items on the menu.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the menu has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dish(name: &str, price: u32, category: Category) -> NewMenuItem {
        NewMenuItem {
            name: DishName::parse(name).unwrap(),
            price: Price::from_units(price),
            category,
            description: Description::parse("test dish").unwrap(),
        }
    }

    #[test]
    fn test_add_appends_and_is_retrievable() {
        let mut menu = MenuStore::new();
        let first = menu.add(dish("Soup", 40, Category::Starters));
        let second = menu.add(dish("Steak", 200, Category::Mains));

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.items().last().unwrap().id, second);
        assert_eq!(menu.get(first).unwrap().name.as_str(), "Soup");
        assert_eq!(menu.find_by_name("Steak").unwrap().id, second);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut menu = MenuStore::seeded();
        let id = menu.find_by_name("Bruschetta").unwrap().id;

        assert!(menu.remove(id).is_some());
        assert_eq!(menu.len(), 8);
        assert!(menu.remove(id).is_none());
        assert_eq!(menu.len(), 8);
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_items() {
        let mut menu = MenuStore::new();
        let a = menu.add(dish("A", 1, Category::Starters));
        let b = menu.add(dish("B", 2, Category::Starters));
        let c = menu.add(dish("C", 3, Category::Starters));

        menu.remove(b);

        let ids: Vec<_> = menu.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut menu = MenuStore::new();
        let first = menu.add(dish("A", 1, Category::Mains));
        menu.remove(first);
        let second = menu.add(dish("A", 1, Category::Mains));
        assert_ne!(first, second);
    }

    #[test]
    fn test_duplicate_names_are_distinct_items() {
        let mut menu = MenuStore::new();
        let first = menu.add(dish("Special", 100, Category::Mains));
        let second = menu.add(dish("Special", 120, Category::Mains));

        menu.remove(second);

        assert_eq!(menu.len(), 1);
        assert_eq!(menu.get(first).unwrap().price, Price::from_units(100));
    }

    #[test]
    fn test_remove_by_name_takes_first_match_only() {
        let mut menu = MenuStore::new();
        let first = menu.add(dish("Special", 100, Category::Mains));
        let second = menu.add(dish("Special", 120, Category::Mains));

        assert_eq!(menu.remove_by_name("Special").unwrap().id, first);
        assert!(menu.get(second).is_some());
        assert!(menu.remove_by_name("Nothing").is_none());
    }

    #[test]
    fn test_in_category_filters() {
        let menu = MenuStore::seeded();
        let names: Vec<_> = menu
            .in_category(Category::Desserts)
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chocolate Lava Cake", "Cheesecake", "Ice Cream Sundae"]);
    }
}
