//! Integration tests for the guest order and checkout.

use chef_kiss_core::{Category, CoreError, MenuItemId, Price};
use chef_kiss_integration_tests::{id_of, seeded_state};

#[test]
fn test_cart_total_for_bread_and_burger() {
    let mut state = seeded_state();
    state.add_to_order(id_of(&state, "Garlic Bread")).expect("on menu");
    state.add_to_order(id_of(&state, "Rib Burger")).expect("on menu");

    let checkout = state.checkout_screen();

    assert_eq!(checkout.lines.len(), 2);
    assert_eq!(checkout.total, Price::from_units(170));
    assert_eq!(checkout.total.to_string(), "R170.00");
}

#[test]
fn test_place_order_empties_cart() {
    let mut state = seeded_state();
    state.add_to_order(id_of(&state, "Garlic Bread")).expect("on menu");
    state.add_to_order(id_of(&state, "Rib Burger")).expect("on menu");

    let receipt = state.place_order().expect("order placed");

    assert_eq!(receipt.total, Price::from_units(170));
    assert_eq!(receipt.lines.len(), 2);
    assert!(state.cart().is_empty());
    assert_eq!(state.cart().total(), Price::ZERO);
    assert!(state.checkout_screen().is_empty());
}

#[test]
fn test_receipts_are_not_kept() {
    let mut state = seeded_state();
    state.add_to_order(id_of(&state, "Cheesecake")).expect("on menu");
    let first = state.place_order().expect("order placed");
    state.add_to_order(id_of(&state, "Cheesecake")).expect("on menu");
    let second = state.place_order().expect("order placed");

    assert_ne!(first.reference, second.reference);
    assert_eq!(second.lines.len(), 1);
    assert_eq!(state.place_order(), Err(CoreError::EmptyOrder));
}

#[test]
fn test_same_dish_twice_is_two_lines() {
    let mut state = seeded_state();
    let wrap = id_of(&state, "BBQ Wrap");

    state.add_to_order(wrap).expect("on menu");
    state.add_to_order(wrap).expect("on menu");

    assert_eq!(state.cart().len(), 2);
    assert_eq!(state.cart().total(), Price::from_units(300));
}

#[test]
fn test_cart_keeps_removed_dish() {
    let mut state = seeded_state();
    let wings = id_of(&state, "Buffalo Wings and Ribs");
    state.add_to_order(wings).expect("on menu");

    state.remove_menu_item(wings);

    assert_eq!(state.cart().len(), 1);
    assert_eq!(state.checkout_screen().total, Price::from_units(250));
    assert!(
        state
            .guest_screen(Category::Mains)
            .items
            .iter()
            .all(|item| item.id != wings)
    );
}

#[test]
fn test_cannot_order_removed_dish() {
    let mut state = seeded_state();
    let soup = id_of(&state, "Creamy mushroom soup");
    state.remove_menu_item(soup);

    assert_eq!(state.add_to_order(soup), Err(CoreError::NotFound(soup)));
    assert!(state.cart().is_empty());
}

#[test]
fn test_unknown_id_is_not_found() {
    let mut state = seeded_state();
    let unknown = MenuItemId::new(42);

    let err = state.add_to_order(unknown).expect_err("no such dish");

    assert_eq!(err.to_string(), "Menu item #42 not found");
}
