//! The house menu every fresh session starts with.

use crate::menu::NewMenuItem;
use crate::types::{Category, Description, DishName, Price};

/// `(name, price, category, description)` for each house dish, in menu order.
const HOUSE_MENU: [(&str, u32, Category, &str); 9] = [
    (
        "Garlic Bread",
        45,
        Category::Starters,
        "Crispy oven-baked bread topped with garlic butter and herbs.",
    ),
    (
        "Bruschetta",
        55,
        Category::Starters,
        "Toasted bread topped with fresh tomatoes, basil, and olive oil.",
    ),
    (
        "Creamy mushroom soup",
        75,
        Category::Starters,
        "Use porcini and wild mushrooms to make this rich and creamy soup. Serve with croutons and chives",
    ),
    (
        "Buffalo Wings and Ribs",
        250,
        Category::Mains,
        "A hearty platter of BBQ ribs and spicy buffalo wings.",
    ),
    (
        "BBQ Wrap",
        150,
        Category::Mains,
        "Grilled chicken with smoky BBQ sauce wrapped in a soft tortilla.",
    ),
    (
        "Rib Burger",
        125,
        Category::Mains,
        "Tender rib meat served in a toasted bun with our special sauce.",
    ),
    (
        "Chocolate Lava Cake",
        90,
        Category::Desserts,
        "Warm chocolate cake with a molten chocolate center.",
    ),
    (
        "Cheesecake",
        85,
        Category::Desserts,
        "Creamy vanilla cheesecake with a crunchy biscuit base.",
    ),
    (
        "Ice Cream Sundae",
        70,
        Category::Desserts,
        "Vanilla ice cream topped with chocolate sauce and nuts.",
    ),
];

/// The nine house dishes as create payloads.
pub fn seed_items() -> impl Iterator<Item = NewMenuItem> {
    HOUSE_MENU
        .into_iter()
        .filter_map(|(name, price, category, description)| {
            Some(NewMenuItem {
                name: DishName::parse(name).ok()?,
                price: Price::from_units(price),
                category,
                description: Description::parse(description).ok()?,
            })
        })
}
