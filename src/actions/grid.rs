use crate::app::AppState;
use std::time::Instant;

pub fn activate_card(app: &mut AppState, index: usize) {
    app.activate_card(index, Instant::now());
}

/// Secondary activation: never zooms the card or opens the modal.
pub fn add_card_to_cart(app: &mut AppState, index: usize) {
    if app.add_card_to_cart(index, Instant::now()) {
        let total = app.config.format_price(app.cart.total());
        app.set_message(format!("Cart total: {}", total));
    }
}

pub fn scroll_grid(app: &mut AppState, rows: isize) {
    app.grid.scroll_by(rows);
}
