//! Top-level application state.

use tracing::{debug, info};

use crate::cart::{CartStore, OrderReceipt};
use crate::error::{CoreError, Result};
use crate::form::MenuItemForm;
use crate::menu::{MenuItem, MenuStore};
use crate::screens::{CheckoutScreen, GuestScreen, HomeScreen, ManageScreen};
use crate::types::{CartLineId, Category, MenuItemId};

/// The menu and the cart, owned by whoever drives the UI.
///
/// All reads hand out borrowed snapshots; all writes take `&mut self`, so the
/// borrow checker enforces a single writer. There is no interior mutability
/// and no locking: every operation runs to completion synchronously.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    menu: MenuStore,
    cart: CartStore,
}

impl AppState {
    /// Create state around an existing menu, with an empty cart.
    #[must_use]
    pub fn new(menu: MenuStore) -> Self {
        Self {
            menu,
            cart: CartStore::new(),
        }
    }

    /// Create state with the house menu and an empty cart.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(MenuStore::seeded())
    }

    /// Get a reference to the menu.
    #[must_use]
    pub const fn menu(&self) -> &MenuStore {
        &self.menu
    }

    /// Get a reference to the cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    // =========================================================================
    // Screens
    // =========================================================================

    #[must_use]
    pub fn home_screen(&self) -> HomeScreen<'_> {
        HomeScreen::build(self.menu.items())
    }

    #[must_use]
    pub fn manage_screen(&self) -> ManageScreen<'_> {
        ManageScreen::build(self.menu.items())
    }

    #[must_use]
    pub fn guest_screen(&self, category: Category) -> GuestScreen<'_> {
        GuestScreen::build(self.menu.items(), category)
    }

    #[must_use]
    pub fn checkout_screen(&self) -> CheckoutScreen<'_> {
        CheckoutScreen::build(self.cart.lines())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate the chef's form and append the item to the menu.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Form`] if the form is incomplete; the menu is left
    /// unchanged.
    pub fn add_menu_item(&mut self, form: &MenuItemForm) -> Result<MenuItemId> {
        let item = form.validate()?;
        Ok(self.menu.add(item))
    }

    /// Remove a menu item. Items already in the cart are unaffected.
    pub fn remove_menu_item(&mut self, id: MenuItemId) -> Option<MenuItem> {
        self.menu.remove(id)
    }

    /// Add a copy of a menu item to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no menu item has this ID.
    pub fn add_to_order(&mut self, id: MenuItemId) -> Result<CartLineId> {
        let item = self.menu.get(id).ok_or(CoreError::NotFound(id))?;
        Ok(self.cart.add(item))
    }

    /// Place the order: empty the cart and hand back a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyOrder`] if the cart is empty.
    pub fn place_order(&mut self) -> Result<OrderReceipt> {
        if self.cart.is_empty() {
            debug!("order rejected: cart is empty");
            return Err(CoreError::EmptyOrder);
        }
        let receipt = OrderReceipt::new(self.cart.clear());
        info!(
            reference = %receipt.reference,
            lines = receipt.lines.len(),
            total = %receipt.total,
            "order placed"
        );
        Ok(receipt)
    }
}
