//! Chef input for new menu items.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::menu::NewMenuItem;
use crate::types::{Category, Description, DishName, Price};

/// Rejection of a submitted [`MenuItemForm`].
///
/// A missing field and an unparseable price produce the same error.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    IncompleteFields,
}

/// Raw, unvalidated fields of the "add menu item" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Category,
}

impl MenuItemForm {
    /// Validate the fields into a create payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::IncompleteFields`] if the name or description is
    /// blank, or the price is not a non-negative number.
    pub fn validate(&self) -> Result<NewMenuItem, FormError> {
        let name = DishName::parse(&self.name).map_err(|e| reject("name", &e))?;
        let description =
            Description::parse(&self.description).map_err(|e| reject("description", &e))?;
        let price = Price::parse(&self.price).map_err(|e| reject("price", &e))?;

        Ok(NewMenuItem {
            name,
            price,
            category: self.category,
            description,
        })
    }

    /// Clear the text fields after a successful submit.
    ///
    /// The selected category is kept.
    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.price.clear();
    }
}

fn reject(field: &'static str, error: &dyn std::error::Error) -> FormError {
    debug!(field, %error, "menu item form rejected");
    FormError::IncompleteFields
}
