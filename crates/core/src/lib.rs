//! Chef Kiss Core - Menu and order state model.
//!
//! This crate holds everything the restaurant menu knows how to do, with no
//! I/O and no UI:
//! - `menu` - The chef-managed list of dishes
//! - `cart` - The guest's order in progress and the receipt handed back at checkout
//! - `summary` - Per-category averages, grouping and cart totals
//! - `screens` - Typed read models for the browse, manage, guest and checkout screens
//! - `state` - [`AppState`], the single owner of the menu and cart
//!
//! # Example
//!
//! ```
//! use chef_kiss_core::{AppState, Category};
//!
//! let mut state = AppState::seeded();
//! let bread = state.menu().find_by_name("Garlic Bread").map(|item| item.id).unwrap();
//! state.add_to_order(bread).unwrap();
//!
//! assert_eq!(state.checkout_screen().total.to_string(), "R45.00");
//! assert_eq!(state.guest_screen(Category::Starters).items.len(), 3);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod error;
pub mod form;
pub mod menu;
pub mod screens;
pub mod seed;
pub mod state;
pub mod summary;
pub mod types;

pub use cart::{CartLine, CartStore, OrderReceipt};
pub use error::CoreError;
pub use form::{FormError, MenuItemForm};
pub use menu::{MenuItem, MenuStore, NewMenuItem};
pub use screens::{CategoryAverage, CheckoutScreen, GuestScreen, HomeScreen, ManageScreen};
pub use state::AppState;
pub use summary::{CategoryGroup, CategoryGroups};
pub use types::*;
