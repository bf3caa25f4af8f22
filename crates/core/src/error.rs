//! Errors returned by [`AppState`](crate::AppState) operations.

use thiserror::Error;

use crate::form::FormError;
use crate::types::MenuItemId;

/// Application-level error type for menu and order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The submitted menu item form was rejected.
    #[error(transparent)]
    Form(#[from] FormError),

    /// No menu item has this ID.
    #[error("Menu item #{0} not found")]
    NotFound(MenuItemId),

    /// Checkout was attempted with nothing in the cart.
    #[error("No items in your order.")]
    EmptyOrder,
}

/// Result type alias for `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;
