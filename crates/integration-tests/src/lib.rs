//! Integration tests for the Chef Kiss menu.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p chef-kiss-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `menu_scenarios` - Adding and removing dishes
//! - `order_scenarios` - Cart and checkout
//! - `derived_views` - Averages, grouping and screen models
//!
//! This crate only exposes fixtures shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chef_kiss_core::{AppState, Category, MenuItemForm, MenuItemId};

/// A fresh session with the house menu.
#[must_use]
pub fn seeded_state() -> AppState {
    AppState::seeded()
}

/// Build a filled-in chef form.
#[must_use]
pub fn form(name: &str, description: &str, price: &str, category: Category) -> MenuItemForm {
    MenuItemForm {
        name: name.to_owned(),
        description: description.to_owned(),
        price: price.to_owned(),
        category,
    }
}

/// ID of the first dish with this name.
///
/// # Panics
///
/// Panics if the menu has no such dish.
#[must_use]
pub fn id_of(state: &AppState, name: &str) -> MenuItemId {
    state
        .menu()
        .find_by_name(name)
        .map(|item| item.id)
        .expect("dish should be on the menu")
}

/// Names of the dishes in one category, in menu order.
#[must_use]
pub fn names_in(state: &AppState, category: Category) -> Vec<String> {
    state
        .menu()
        .in_category(category)
        .map(|item| item.name.to_string())
        .collect()
}
