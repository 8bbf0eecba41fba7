use crate::hit::{HitMap, HitTarget};
use crate::ui::constants::{CURSOR_INDICATOR, OK_BUTTON};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

const ALERT_WIDTH: u16 = 56;
const PLEDGE_WIDTH: u16 = 48;
const PLEDGE_HEIGHT: u16 = 7;

pub struct AlertRenderer;

impl AlertRenderer {
    pub fn render(frame: &mut Frame, hit_map: &mut HitMap, message: &str, area: Rect) {
        let width = ALERT_WIDTH.min(area.width);
        let text_width = width.saturating_sub(4).max(1) as usize;
        let text_rows = message.chars().count().div_ceil(text_width).max(1) as u16;
        // Borders, a blank line, and the button row.
        let popup = centered_rect(width, text_rows + 4, area);

        frame.render_widget(Clear, popup);
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .title(" Notice ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);
        if inner.height == 0 {
            return;
        }

        let message_area = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        );
        frame.render_widget(
            Paragraph::new(message).wrap(Wrap { trim: true }),
            message_area,
        );

        let ok_width = (OK_BUTTON.len() as u16).min(inner.width);
        let ok = Rect::new(
            inner.x + (inner.width - ok_width) / 2,
            inner.bottom() - 1,
            ok_width,
            1,
        );
        frame.render_widget(
            Paragraph::new(OK_BUTTON).style(Style::default().add_modifier(Modifier::BOLD)),
            ok,
        );
        hit_map.push(ok, HitTarget::AlertDismiss);
    }
}

pub struct PledgeRenderer;

impl PledgeRenderer {
    pub fn render(frame: &mut Frame, buffer: &str, cursor_pos: usize, area: Rect) {
        let popup = centered_rect(PLEDGE_WIDTH, PLEDGE_HEIGHT, area);
        frame.render_widget(Clear, popup);

        let mut input = String::with_capacity(buffer.len() + 3);
        input.push_str(&buffer[..cursor_pos]);
        input.push(CURSOR_INDICATOR);
        input.push_str(&buffer[cursor_pos..]);

        let lines = vec![
            Line::from("Pledge to plant a tree. Your name:"),
            Line::from(""),
            Line::styled(
                format!("> {}", input),
                Style::default().fg(Color::Cyan),
            ),
            Line::from(""),
            Line::styled(
                "Enter to submit, Esc to cancel",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" Plant a Tree ")
                    .border_style(Style::default().fg(Color::Green)),
            );
        frame.render_widget(paragraph, popup);
    }
}
