pub mod alert;
pub mod cart;
pub mod constants;
pub mod grid;
pub mod help;
pub mod layout;
pub mod modal;
pub mod sidebar;
pub mod status_line;

use crate::app::{AppMode, AppState};
use alert::{AlertRenderer, PledgeRenderer};
use cart::CartRenderer;
use constants::{ELLIPSIS, MIN_HEIGHT, MIN_WIDTH, TOO_SMALL_TEXT};
use grid::GridRenderer;
use help::HelpRenderer;
use layout::Mounts;
use modal::ModalRenderer;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};
use sidebar::SidebarRenderer;
use status_line::StatusLineRenderer;
use unicode_width::UnicodeWidthChar;

// Main render function. Also rebuilds the click map for the frame.
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let area = frame.area();
    app.hit_map.clear();

    let Some(mounts) = Mounts::compute(area) else {
        render_too_small(frame, area);
        return;
    };

    if app.mode == AppMode::Help {
        HelpRenderer::render(frame, mounts.body);
        StatusLineRenderer::render(frame, app, mounts.status);
        return;
    }

    SidebarRenderer::render(frame, app, mounts.categories);
    GridRenderer::render(frame, app, mounts.grid);
    CartRenderer::render(frame, app, mounts.cart_list, mounts.cart_total);
    StatusLineRenderer::render(frame, app, mounts.status);

    if app.modal.background_dimmed() {
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));
        ModalRenderer::render(frame, app, area);
    }

    if let AppMode::Pledge { buffer, cursor_pos } = &app.mode {
        PledgeRenderer::render(frame, buffer, *cursor_pos, mounts.body);
    }

    if let Some(message) = &app.alert {
        AlertRenderer::render(frame, &mut app.hit_map, message, area);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let text = format!(
        "{}: {}x{}, need {}x{}",
        TOO_SMALL_TEXT, area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Cuts `text` to `width` terminal columns, marking the cut with an ellipsis.
pub(crate) fn clip(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}
