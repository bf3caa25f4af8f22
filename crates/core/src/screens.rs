//! Typed read models for the four screens.
//!
//! Each screen gets exactly the data it renders, borrowed from
//! [`AppState`](crate::AppState). A UI shell builds one after every mutation
//! and draws it; screens never mutate state themselves.

use serde::Serialize;

use crate::cart::CartLine;
use crate::menu::MenuItem;
use crate::summary::{self, CategoryGroups};
use crate::types::{Category, Price};

/// Average price of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryAverage {
    pub category: Category,
    pub average: Price,
}

/// The browse screen: averages followed by the grouped menu.
#[derive(Debug, Clone, Serialize)]
pub struct HomeScreen<'a> {
    pub title: &'static str,
    pub averages: [CategoryAverage; 3],
    pub groups: CategoryGroups<'a>,
}

impl<'a> HomeScreen<'a> {
    /// Heading of the browse screen.
    pub const TITLE: &'static str = "Chef Kiss Menu";

    /// Compute the averages and groups for `items`.
    #[must_use]
    pub fn build(items: &'a [MenuItem]) -> Self {
        Self {
            title: Self::TITLE,
            averages: Category::ALL.map(|category| CategoryAverage {
                category,
                average: summary::average_price(items, category),
            }),
            groups: summary::group_by_category(items),
        }
    }
}

/// The chef's screen: every item with its details, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct ManageScreen<'a> {
    pub title: &'static str,
    pub items: &'a [MenuItem],
}

impl<'a> ManageScreen<'a> {
    /// Heading of the chef's screen.
    pub const TITLE: &'static str = "Chef Menu Manager";

    /// Show `items` as they are.
    #[must_use]
    pub const fn build(items: &'a [MenuItem]) -> Self {
        Self {
            title: Self::TITLE,
            items,
        }
    }
}

/// The guest's screen: one category's items, each orderable.
#[derive(Debug, Clone, Serialize)]
pub struct GuestScreen<'a> {
    pub title: &'static str,
    pub selected: Category,
    pub items: Vec<&'a MenuItem>,
}

impl<'a> GuestScreen<'a> {
    /// Heading of the guest's screen.
    pub const TITLE: &'static str = "Guest Menu";

    /// Keep the items of the `selected` category.
    #[must_use]
    pub fn build(items: &'a [MenuItem], selected: Category) -> Self {
        Self {
            title: Self::TITLE,
            selected,
            items: summary::filter_by_category(items, selected),
        }
    }
}

/// The checkout screen: cart lines and their total.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutScreen<'a> {
    pub title: &'static str,
    pub lines: &'a [CartLine],
    pub total: Price,
}

impl<'a> CheckoutScreen<'a> {
    /// Heading of the checkout screen.
    pub const TITLE: &'static str = "Checkout";

    /// Total the cart `lines`.
    #[must_use]
    pub fn build(lines: &'a [CartLine]) -> Self {
        Self {
            title: Self::TITLE,
            lines,
            total: summary::cart_total(lines),
        }
    }

    /// Returns `true` when there is nothing to check out.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::menu::MenuStore;

    #[test]
    fn test_home_screen_averages_in_menu_order() {
        let menu = MenuStore::seeded();
        let home = HomeScreen::build(menu.items());

        let shown: Vec<_> = home
            .averages
            .iter()
            .map(|a| format!("{}: {}", a.category, a.average))
            .collect();
        assert_eq!(shown, vec!["Starters: R58.33", "Mains: R175.00", "Desserts: R81.67"]);
        assert_eq!(home.groups.total_len(), 9);
    }

    #[test]
    fn test_guest_screen_filters_selected_category() {
        let menu = MenuStore::seeded();
        let guest = GuestScreen::build(menu.items(), Category::Mains);
        assert_eq!(guest.items.len(), 3);
        assert!(guest.items.iter().all(|item| item.category == Category::Mains));
    }

    #[test]
    fn test_checkout_screen_empty_and_filled() {
        let menu = MenuStore::seeded();
        let mut cart = CartStore::new();
        assert!(CheckoutScreen::build(cart.lines()).is_empty());

        cart.add(menu.find_by_name("Cheesecake").unwrap());
        let checkout = CheckoutScreen::build(cart.lines());
        assert!(!checkout.is_empty());
        assert_eq!(checkout.total, Price::from_units(85));
    }

    #[test]
    fn test_home_screen_serializes() {
        let menu = MenuStore::seeded();
        let json = serde_json::to_value(HomeScreen::build(menu.items())).unwrap();
        assert_eq!(json["title"], "Chef Kiss Menu");
        assert_eq!(json["averages"][0]["average"], "58.33");
        assert_eq!(json["groups"]["mains"]["items"][2]["name"], "Rib Burger");
    }
}
