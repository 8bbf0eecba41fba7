use crate::app::AppState;
use crate::modal::CloseTrigger;

pub fn close_modal(app: &mut AppState, trigger: CloseTrigger) {
    app.close_modal(trigger);
}

/// The modal's own "Add to Cart" button: adds the shown plant, then closes.
pub fn add_modal_plant_to_cart(app: &mut AppState) {
    let Some(detail) = app.modal.detail() else {
        return;
    };
    let summary = &detail.summary;
    let (id, name, price) = (
        summary.id,
        summary.name.clone(),
        app.defaults.price(summary.price),
    );

    app.cart.add(id, name, price);
    let total = app.config.format_price(app.cart.total());
    app.set_message(format!("Cart total: {}", total));
    app.close_modal(CloseTrigger::Button);
}
