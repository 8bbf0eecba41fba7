use crate::app::{AppState, Focus};
use crate::grid::{Card, GridContent, LOAD_ERROR_MESSAGE, NO_PLANTS_MESSAGE};
use crate::hit::HitTarget;
use crate::ui::clip;
use crate::ui::constants::{CARD_DESCRIPTION_LINES, CARD_HEIGHT, CARD_WIDTH, LOADING_TEXT};
use crate::ui::sidebar::border_style;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

pub struct GridRenderer;

impl GridRenderer {
    pub fn render(frame: &mut Frame, app: &mut AppState, area: Rect) {
        let title = format!(" {} ", app.categories.label(app.categories.active()));
        let block = Block::bordered()
            .title(title)
            .border_style(border_style(app.focus == Focus::Grid));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if app.is_loading() {
            Self::render_notice(frame, inner, LOADING_TEXT, Style::default().fg(Color::Yellow));
            return;
        }

        let notice = match app.grid.content() {
            GridContent::Pending => return,
            GridContent::Empty => Some((NO_PLANTS_MESSAGE, Style::default())),
            GridContent::Failed => Some((LOAD_ERROR_MESSAGE, Style::default().fg(Color::Red))),
            GridContent::Cards(_) => None,
        };
        match notice {
            Some((text, style)) => Self::render_notice(frame, inner, text, style),
            None => Self::render_cards(frame, app, inner),
        }
    }

    fn render_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
        if area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        let paragraph = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, row);
    }

    fn render_cards(frame: &mut Frame, app: &mut AppState, area: Rect) {
        let card_width = CARD_WIDTH.min(area.width).max(1);
        let columns = (area.width / card_width).max(1) as usize;
        let rows = (area.height / CARD_HEIGHT).max(1) as usize;
        app.grid.set_viewport(columns, rows);

        let first = app.grid.scroll_row() * columns;
        let last = (first + rows * columns).min(app.grid.len());
        let show_cursor = app.focus == Focus::Grid;

        for index in first..last {
            let slot = index - first;
            let col = (slot % columns) as u16;
            let row = (slot / columns) as u16;
            let card_area = Rect::new(
                area.x + col * card_width,
                area.y + row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            )
            .intersection(area);

            let Some(card) = app.grid.card(index) else {
                break;
            };
            let state = CardState {
                active: app.grid.active_card() == Some(index),
                under_cursor: show_cursor && app.grid.cursor() == index,
            };
            let button = draw_card(frame, card, state, card_area, &app.config.currency_symbol);

            // Body first: the button is registered on top of it.
            app.hit_map.push(card_area, HitTarget::CardBody(index));
            app.hit_map.push(button, HitTarget::CardButton(index));
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CardState {
    active: bool,
    under_cursor: bool,
}

/// Draws one card and returns the area of its add-to-cart button.
fn draw_card(frame: &mut Frame, card: &Card, state: CardState, area: Rect, currency: &str) -> Rect {
    let view = &card.view;
    let mut block = Block::bordered().title(clip(&format!(" {} ", view.name), area.width as usize));
    block = if state.active {
        block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else if state.under_cursor {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block.border_style(Style::default().fg(Color::DarkGray))
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return Rect::default();
    }

    let width = inner.width as usize;
    let mut y = inner.y;
    let bottom = inner.bottom();

    let badge = clip(&format!("[{}]", view.category), width);
    frame.render_widget(
        Paragraph::new(Line::styled(badge, Style::default().fg(Color::Green))),
        Rect::new(inner.x, y, inner.width, 1),
    );
    y += 1;

    let description_height = CARD_DESCRIPTION_LINES.min(bottom.saturating_sub(y));
    if description_height > 0 {
        frame.render_widget(
            Paragraph::new(view.description.as_str())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            Rect::new(inner.x, y, inner.width, description_height),
        );
        y += description_height;
    }

    if y + 1 < bottom {
        let price = format!("{}{}", currency, view.price);
        frame.render_widget(
            Paragraph::new(Line::styled(price, Style::default().add_modifier(Modifier::BOLD))),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }

    let button_area = Rect::new(inner.x, bottom - 1, inner.width, 1);
    let button_style = if card.shows_feedback() {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::Black).bg(Color::LightGreen)
    };
    frame.render_widget(
        Paragraph::new(format!("[ {} ]", card.button_label()))
            .style(button_style)
            .alignment(Alignment::Center),
        button_area,
    );
    button_area
}
