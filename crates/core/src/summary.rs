//! Pure computations derived from the menu and cart.
//!
//! Nothing here is cached; callers recompute after every mutation.

use serde::Serialize;

use crate::cart::CartLine;
use crate::menu::MenuItem;
use crate::types::{Category, Price};

/// Mean price of the items in `category`, rounded to two decimal places.
///
/// Returns [`Price::ZERO`] when the category has no items.
#[must_use]
pub fn average_price(items: &[MenuItem], category: Category) -> Price {
    let (total, count) = items
        .iter()
        .filter(|item| item.category == category)
        .fold((Price::ZERO, 0_u32), |(total, count), item| {
            (total + item.price, count + 1)
        });
    total.mean_of(count)
}

/// Items in `category`, in insertion order.
#[must_use]
pub fn filter_by_category(items: &[MenuItem], category: Category) -> Vec<&MenuItem> {
    items
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

/// Sum of the line prices; zero for an empty cart.
#[must_use]
pub fn cart_total(lines: &[CartLine]) -> Price {
    lines.iter().map(CartLine::price).sum()
}

/// The items of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a MenuItem>,
}

impl CategoryGroup<'_> {
    /// Number of items in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the category has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The menu partitioned into one group per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroups<'a> {
    starters: CategoryGroup<'a>,
    mains: CategoryGroup<'a>,
    desserts: CategoryGroup<'a>,
}

impl<'a> CategoryGroups<'a> {
    /// The group for `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> &CategoryGroup<'a> {
        match category {
            Category::Starters => &self.starters,
            Category::Mains => &self.mains,
            Category::Desserts => &self.desserts,
        }
    }

    /// Groups in menu order (Starters, Mains, Desserts).
    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        [&self.starters, &self.mains, &self.desserts].into_iter()
    }

    /// Item count across all groups.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.iter().map(CategoryGroup::len).sum()
    }
}

/// Partition `items` by category, keeping insertion order within each group.
#[must_use]
pub fn group_by_category(items: &[MenuItem]) -> CategoryGroups<'_> {
    let group = |category| CategoryGroup {
        category,
        items: filter_by_category(items, category),
    };
    CategoryGroups {
        starters: group(Category::Starters),
        mains: group(Category::Mains),
        desserts: group(Category::Desserts),
    }
}
