use crate::app::{AppState, Focus};
use crate::cart::LineItem;
use crate::hit::HitTarget;
use crate::ui::clip;
use crate::ui::constants::{EMPTY_CART_TEXT, REMOVE_GLYPH};
use crate::ui::sidebar::border_style;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

// Each line item takes a name row and a price row.
const ROWS_PER_LINE: u16 = 2;
const REMOVE_HIT_WIDTH: u16 = 3;

pub struct CartRenderer;

impl CartRenderer {
    pub fn render(frame: &mut Frame, app: &mut AppState, list_area: Rect, total_area: Rect) {
        Self::render_lines(frame, app, list_area);
        Self::render_total(frame, app, total_area);
    }

    fn render_lines(frame: &mut Frame, app: &mut AppState, area: Rect) {
        let focused = app.focus == Focus::Cart;
        let block = Block::bordered()
            .title(format!(" Your Cart ({}) ", app.cart.len()))
            .border_style(border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if app.cart.is_empty() {
            frame.render_widget(
                Paragraph::new(EMPTY_CART_TEXT)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let visible = (inner.height / ROWS_PER_LINE).max(1) as usize;
        let offset = app.cart_cursor.saturating_sub(visible - 1);
        let width = inner.width as usize;
        let name_width = width.saturating_sub(REMOVE_HIT_WIDTH as usize);

        for (slot, (index, line)) in app.cart.lines().enumerate().skip(offset).enumerate() {
            if slot >= visible {
                break;
            }
            let y = inner.y + slot as u16 * ROWS_PER_LINE;
            let (name, price) = line_text(line, &app.config.currency_symbol);

            let mut name_style = Style::default().add_modifier(Modifier::BOLD);
            if focused && index == app.cart_cursor {
                name_style = name_style.add_modifier(Modifier::REVERSED);
            }
            frame.render_widget(
                Paragraph::new(Line::styled(clip(&name, name_width), name_style)),
                Rect::new(inner.x, y, name_width as u16, 1),
            );

            let remove = Rect::new(
                inner.right().saturating_sub(REMOVE_HIT_WIDTH),
                y,
                REMOVE_HIT_WIDTH.min(inner.width),
                1,
            );
            frame.render_widget(
                Paragraph::new(REMOVE_GLYPH)
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                remove,
            );
            app.hit_map.push(remove, HitTarget::CartRemove(index));

            if y + 1 < inner.bottom() {
                frame.render_widget(
                    Paragraph::new(clip(&price, width))
                        .style(Style::default().fg(Color::Gray)),
                    Rect::new(inner.x, y + 1, inner.width, 1),
                );
            }
        }
    }

    fn render_total(frame: &mut Frame, app: &AppState, area: Rect) {
        let block = Block::bordered().title(" Total ");
        let total = app.config.format_price(app.cart.total());
        let paragraph = Paragraph::new(Line::styled(
            total,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(block);
        frame.render_widget(paragraph, area);
    }
}

/// The two rows shown for a line item: its name and `৳price × qty`.
pub fn line_text(line: &LineItem, currency: &str) -> (String, String) {
    (
        line.name.clone(),
        format!("{}{} × {}", currency, line.unit_price, line.quantity),
    )
}
