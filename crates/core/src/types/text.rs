//! Validated free-text fields for menu items.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a text field.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// The input is empty or only whitespace.
    #[error("value cannot be empty")]
    Empty,
}

/// Defines a trimmed, non-empty string newtype.
macro_rules! define_text {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse from user input, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns [`TextError::Empty`] if nothing is left after trimming.
            pub fn parse(s: &str) -> Result<Self, TextError> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(TextError::Empty);
                }
                Ok(Self(s.to_owned()))
            }

            /// Returns the value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl TryFrom<String> for $name {
            type Error = TextError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_text!(
    /// The display name of a dish, e.g. "Garlic Bread".
    ///
    /// Names are not unique; menu items are keyed by
    /// [`MenuItemId`](crate::MenuItemId).
    DishName
);

define_text!(
    /// The menu description of a dish.
    Description
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let name = DishName::parse("  Rib Burger ").unwrap();
        assert_eq!(name.as_str(), "Rib Burger");
        assert!(name == *"Rib Burger");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(DishName::parse(""), Err(TextError::Empty));
        assert_eq!(Description::parse(" \t\n"), Err(TextError::Empty));
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<DishName>("\"\"").is_err());
        let desc: Description = serde_json::from_str("\"Warm cake\"").unwrap();
        assert_eq!(desc.to_string(), "Warm cake");
    }
}
