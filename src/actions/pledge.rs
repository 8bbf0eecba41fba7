use crate::app::{AppMode, AppState};
use tracing::info;

pub const PLEDGE_THANKS: &str =
    "Thank you for your interest in planting trees! This is a demo application.";

pub fn open_pledge(app: &mut AppState) {
    app.mode = AppMode::Pledge {
        buffer: String::new(),
        cursor_pos: 0,
    };
}

pub fn type_char(app: &mut AppState, c: char) {
    if let AppMode::Pledge { buffer, cursor_pos } = &mut app.mode {
        buffer.insert(*cursor_pos, c);
        *cursor_pos += c.len_utf8();
    }
}

pub fn backspace(app: &mut AppState) {
    if let AppMode::Pledge { buffer, cursor_pos } = &mut app.mode {
        if let Some(c) = buffer[..*cursor_pos].chars().next_back() {
            *cursor_pos -= c.len_utf8();
            buffer.remove(*cursor_pos);
        }
    }
}

/// Nothing is sent anywhere; the form only thanks the visitor.
pub fn submit_pledge(app: &mut AppState) {
    if let AppMode::Pledge { buffer, .. } = &app.mode {
        info!(name_len = buffer.chars().count(), "pledge form submitted");
        app.mode = AppMode::Browsing;
        app.show_alert(PLEDGE_THANKS);
    }
}

pub fn cancel_pledge(app: &mut AppState) {
    if matches!(app.mode, AppMode::Pledge { .. }) {
        app.mode = AppMode::Browsing;
    }
}
