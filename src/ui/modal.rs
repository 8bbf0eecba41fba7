use crate::app::AppState;
use crate::hit::HitTarget;
use crate::modal::{DetailView, ModalState};
use crate::ui::constants::{CLOSE_BUTTON, DETAIL_LOADING_TEXT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

const PANEL_WIDTH: u16 = 64;
const PANEL_HEIGHT: u16 = 20;

pub struct ModalRenderer;

impl ModalRenderer {
    /// Draws the overlay on top of `area`. Everything outside the panel counts
    /// as the backdrop.
    pub fn render(frame: &mut Frame, app: &mut AppState, area: Rect) {
        app.hit_map.push(area, HitTarget::ModalBackdrop);

        let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
        frame.render_widget(Clear, panel);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Plant Details ")
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        app.hit_map.push(panel, HitTarget::ModalPanel);

        let [body, buttons] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let add_label = match app.modal.state() {
            ModalState::Closed => return,
            ModalState::Loading { .. } => {
                frame.render_widget(
                    Paragraph::new(DETAIL_LOADING_TEXT)
                        .style(Style::default().fg(Color::Yellow))
                        .alignment(Alignment::Center),
                    Rect::new(body.x, body.y + body.height / 2, body.width, 1),
                );
                None
            }
            ModalState::Open(detail) => {
                let view = DetailView::from_detail(detail, &app.defaults);
                frame.render_widget(
                    Paragraph::new(detail_lines(&view, &app.config.currency_symbol))
                        .wrap(Wrap { trim: true }),
                    body,
                );
                Some(format!(
                    "[ Add to Cart - {} ]",
                    app.config.format_price(u64::from(view.price))
                ))
            }
        };

        Self::render_buttons(frame, app, buttons, add_label);
    }

    fn render_buttons(frame: &mut Frame, app: &mut AppState, row: Rect, add_label: Option<String>) {
        let close_width = (CLOSE_BUTTON.chars().count() as u16).min(row.width);
        let close = Rect::new(row.right() - close_width, row.y, close_width, 1);
        frame.render_widget(
            Paragraph::new(CLOSE_BUTTON).style(Style::default().add_modifier(Modifier::BOLD)),
            close,
        );
        app.hit_map.push(close, HitTarget::ModalClose);

        if let Some(label) = add_label {
            let free = row.width.saturating_sub(close_width + 1);
            let add_width = (label.chars().count() as u16).min(free);
            let add = Rect::new(row.x, row.y, add_width, 1);
            frame.render_widget(
                Paragraph::new(label).style(Style::default().fg(Color::Black).bg(Color::Green)),
                add,
            );
            app.hit_map.push(add, HitTarget::ModalAddToCart);
        }
    }
}

pub fn detail_lines(view: &DetailView, currency: &str) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let field = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(name, label), Span::raw(value)])
    };

    let mut lines = vec![
        Line::styled(
            view.name.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        field("Image: ", view.image.clone()),
        Line::from(""),
        Line::from(view.description.clone()),
        Line::from(""),
        field("Category: ", view.category.clone()),
        field("Price: ", format!("{}{}", currency, view.price)),
    ];
    if let Some(name) = &view.scientific_name {
        lines.push(field("Scientific Name: ", name.clone()));
    }
    if let Some(origin) = &view.origin {
        lines.push(field("Origin: ", origin.clone()));
    }
    lines
}
