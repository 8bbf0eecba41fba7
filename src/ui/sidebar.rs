use crate::app::{AppState, Focus};
use crate::hit::HitTarget;
use crate::ui::clip;
use crate::ui::constants::{ACTIVE_MARKER, INACTIVE_MARKER};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

pub struct SidebarRenderer;

impl SidebarRenderer {
    pub fn render(frame: &mut Frame, app: &mut AppState, area: Rect) {
        let focused = app.focus == Focus::Categories;
        let block = Block::bordered()
            .title(" Categories ")
            .border_style(border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width as usize;
        let mut lines = Vec::with_capacity(app.categories.len());
        for (index, selector) in app.categories.entries().enumerate() {
            if index >= inner.height as usize {
                break;
            }
            let active = app.categories.is_active(selector);
            let marker = if active { ACTIVE_MARKER } else { INACTIVE_MARKER };
            let text = clip(
                &format!("{}{}", marker, app.categories.label(selector)),
                width,
            );

            let mut style = if active {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if focused && index == app.categories.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::styled(text, style));

            let row = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            app.hit_map.push(row, HitTarget::Category(index));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
