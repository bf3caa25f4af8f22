//! Newtype IDs for type-safe entity references.
//!
//! Menu items and cart lines are keyed by surrogate IDs handed out by the
//! store that owns them, never by their display name. Use the `define_id!`
//! macro to create wrappers that cannot be mixed up with each other.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `u32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_u32()`
/// - `From<u32>`, `Into<u32>` and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use chef_kiss_core::define_id;
/// define_id!(TableId);
/// define_id!(WaiterId);
///
/// let table = TableId::new(1);
/// let waiter = WaiterId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: TableId = waiter;
/// # let _ = (table, waiter);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID from a u32 value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the underlying u32 value.
            #[must_use]
            pub const fn as_u32(&self) -> u32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().trim_start_matches('#').parse::<u32>().map(Self)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(MenuItemId);
define_id!(CartLineId);

/// Monotonic ID allocator owned by a store.
///
/// IDs start at 1 and are never handed out twice by the same sequence, even
/// after the entity they were given to has been removed.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    /// Allocate the next raw ID value.
    ///
    /// # Panics
    ///
    /// Panics once all `u32::MAX` IDs have been handed out.
    pub const fn next_raw(&mut self) -> u32 {
        match self.last.checked_add(1) {
            Some(next) => {
                self.last = next;
                next
            }
            None => panic!("ID sequence exhausted"),
        }
    }

    /// Allocate the next [`MenuItemId`].
    pub const fn next_menu_item(&mut self) -> MenuItemId {
        MenuItemId::new(self.next_raw())
    }

    /// Allocate the next [`CartLineId`].
    pub const fn next_cart_line(&mut self) -> CartLineId {
        CartLineId::new(self.next_raw())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_menu_item(), MenuItemId::new(1));
        assert_eq!(seq.next_menu_item(), MenuItemId::new(2));
    }

    #[test]
    #[should_panic(expected = "ID sequence exhausted")]
    fn test_sequence_refuses_to_wrap() {
        let mut seq = IdSequence { last: u32::MAX - 1 };
        assert_eq!(seq.next_raw(), u32::MAX);
        seq.next_raw();
    }

    #[test]
    fn test_id_parse_accepts_hash_prefix() {
        assert_eq!("#7".parse::<MenuItemId>().unwrap(), MenuItemId::new(7));
        assert_eq!(" 3 ".parse::<CartLineId>().unwrap(), CartLineId::new(3));
        assert!("seven".parse::<MenuItemId>().is_err());
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&MenuItemId::new(4)).unwrap();
        assert_eq!(json, "4");
    }
}
