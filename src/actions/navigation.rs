//! Keyboard equivalents of pointing at things: the focused pane decides what
//! the cursor keys and the activation keys mean.

use crate::actions::{activate_card, add_card_to_cart, remove_line, select_category};
use crate::app::{AppState, Focus};

pub fn focus_next(app: &mut AppState) {
    app.focus = app.focus.next();
}

pub fn focus_previous(app: &mut AppState) {
    app.focus = app.focus.previous();
}

pub fn cursor_up(app: &mut AppState) {
    match app.focus {
        Focus::Categories => app.categories.move_cursor_up(),
        Focus::Grid => app.grid.move_cursor(0, -1),
        Focus::Cart => app.cart_cursor = app.cart_cursor.saturating_sub(1),
    }
}

pub fn cursor_down(app: &mut AppState) {
    match app.focus {
        Focus::Categories => app.categories.move_cursor_down(),
        Focus::Grid => app.grid.move_cursor(0, 1),
        Focus::Cart => {
            if app.cart_cursor + 1 < app.cart.len() {
                app.cart_cursor += 1;
            }
        }
    }
}

pub fn cursor_left(app: &mut AppState) {
    if app.focus == Focus::Grid {
        app.grid.move_cursor(-1, 0);
    }
}

pub fn cursor_right(app: &mut AppState) {
    if app.focus == Focus::Grid {
        app.grid.move_cursor(1, 0);
    }
}

/// Enter: pick the category, open the card, or do nothing in the cart.
pub fn activate(app: &mut AppState) {
    match app.focus {
        Focus::Categories => {
            if let Some(selector) = app.categories.cursor_selector() {
                select_category(app, selector);
            }
        }
        Focus::Grid => {
            if !app.grid.is_empty() {
                let index = app.grid.cursor();
                activate_card(app, index);
            }
        }
        Focus::Cart => {}
    }
}

pub fn add_to_cart(app: &mut AppState) {
    if app.focus == Focus::Grid && !app.grid.is_empty() {
        let index = app.grid.cursor();
        add_card_to_cart(app, index);
    }
}

pub fn remove_from_cart(app: &mut AppState) {
    if app.focus == Focus::Cart {
        let index = app.cart_cursor;
        remove_line(app, index);
    }
}
