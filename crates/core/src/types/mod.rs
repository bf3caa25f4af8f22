//! Core types for the Chef Kiss menu.
//!
//! This module provides type-safe wrappers for the domain's primitive values.

pub mod category;
pub mod id;
pub mod price;
pub mod text;

pub use category::{Category, CategoryError};
pub use id::*;
pub use price::{Price, PriceError};
pub use text::{Description, DishName, TextError};
