use crate::app::{AppMode, AppState};

pub fn show_help(app: &mut AppState) {
    app.mode = AppMode::Help;
}

pub fn close_help(app: &mut AppState) {
    app.mode = AppMode::Browsing;
}
