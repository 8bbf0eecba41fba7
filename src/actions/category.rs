use crate::app::AppState;
use crate::catalog::CategorySelector;

pub fn select_category(app: &mut AppState, selector: CategorySelector) {
    app.select_category(selector);
    app.clear_message();
}

pub fn select_category_at(app: &mut AppState, index: usize) {
    if let Some(selector) = app.categories.selector_at(index) {
        select_category(app, selector);
    }
}
