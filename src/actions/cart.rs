use crate::app::AppState;
use tracing::debug;

pub fn remove_line(app: &mut AppState, index: usize) {
    if app.remove_cart_line(index) {
        debug!(index, lines = app.cart.len(), "removed cart line");
        let total = app.config.format_price(app.cart.total());
        app.set_message(format!("Cart total: {}", total));
    }
}
