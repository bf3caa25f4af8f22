//! Plain-text rendering of the screens.
//!
//! Every renderer writes to any `io::Write` so the shell can target stdout and
//! tests can target a buffer.

use std::io::{self, Write};

use chef_kiss_core::{
    Category, CheckoutScreen, GuestScreen, HomeScreen, ManageScreen, MenuItem, OrderReceipt,
};

const NAME_WIDTH: usize = 28;

/// Browse screen: averages, then every category with its dishes.
pub fn home(out: &mut impl Write, screen: &HomeScreen<'_>) -> io::Result<()> {
    writeln!(out, "{}", screen.title)?;
    writeln!(out)?;
    for average in &screen.averages {
        writeln!(out, "{}: {}", average.category, average.average)?;
    }
    for group in screen.groups.iter() {
        writeln!(out)?;
        writeln!(out, "{}", group.category)?;
        for item in &group.items {
            writeln!(out, "  {}", item_row(item))?;
        }
    }
    Ok(())
}

/// Manage screen: every dish with category and description.
pub fn manage(out: &mut impl Write, screen: &ManageScreen<'_>) -> io::Result<()> {
    writeln!(out, "{}", screen.title)?;
    if screen.items.is_empty() {
        writeln!(out, "The menu is empty. Use `add` to create a dish.")?;
    }
    for item in screen.items {
        writeln!(
            out,
            "  {:>4}  {} ({})  {}",
            format!("#{}", item.id),
            item.name,
            item.category,
            item.price
        )?;
        writeln!(out, "        {}", item.description)?;
    }
    Ok(())
}

/// Guest screen: category tabs, then the selected category's dishes.
pub fn guest(out: &mut impl Write, screen: &GuestScreen<'_>) -> io::Result<()> {
    let tabs: Vec<String> = Category::ALL
        .iter()
        .map(|category| {
            if *category == screen.selected {
                format!("[{category}]")
            } else {
                category.to_string()
            }
        })
        .collect();
    writeln!(out, "{}  {}", screen.title, tabs.join(" "))?;
    if screen.items.is_empty() {
        writeln!(out, "Nothing on the menu in {} yet.", screen.selected)?;
    }
    for item in &screen.items {
        writeln!(
            out,
            "  {:>4}  {:<NAME_WIDTH$}  + Add ({})",
            format!("#{}", item.id),
            item.name.as_str(),
            item.price
        )?;
    }
    Ok(())
}

/// Checkout screen: cart lines and total, or the empty-order message.
pub fn checkout(out: &mut impl Write, screen: &CheckoutScreen<'_>) -> io::Result<()> {
    writeln!(out, "{}", screen.title)?;
    if screen.is_empty() {
        writeln!(out, "No items in your order.")?;
        return Ok(());
    }
    for line in screen.lines {
        writeln!(out, "  {}", item_row(&line.item))?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {}", screen.total)?;
    writeln!(out, "Type `place` to place your order.")?;
    Ok(())
}

/// Confirmation shown after an order is placed.
pub fn receipt(out: &mut impl Write, receipt: &OrderReceipt) -> io::Result<()> {
    writeln!(out, "Thank You! Your order has been placed successfully!")?;
    writeln!(out, "Reference: {}", receipt.reference)?;
    writeln!(
        out,
        "Placed at: {}",
        receipt.placed_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "Items: {}", receipt.lines.len())?;
    writeln!(out, "Total: {}", receipt.total)?;
    Ok(())
}

fn item_row(item: &MenuItem) -> String {
    format!(
        "{:>4}  {:<NAME_WIDTH$}  {}",
        format!("#{}", item.id),
        item.name.as_str(),
        item.price
    )
}
