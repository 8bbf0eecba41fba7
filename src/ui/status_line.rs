use crate::app::{AppMode, AppState, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::get_content_and_style(app);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    pub fn get_content_and_style(app: &AppState) -> (String, Style) {
        match &app.mode {
            AppMode::Browsing => Self::render_browsing_mode(app),
            AppMode::Pledge { .. } => (
                String::from("Pledge: Enter to submit, Esc to cancel"),
                Self::prompt_style(),
            ),
            AppMode::Help => (
                String::from("Press ESC or q to close help"),
                Self::prompt_style(),
            ),
        }
    }

    fn render_browsing_mode(app: &AppState) -> (String, Style) {
        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD);
            return (msg.clone(), style);
        }

        let pane = match app.focus {
            Focus::Categories => "categories",
            Focus::Grid => "plants",
            Focus::Cart => "cart",
        };
        let activity = if app.is_loading() { " | loading..." } else { "" };
        let content = format!(
            "Green Earth | {} plants | cart: {} items, {} | {}{} | ? help",
            app.grid.len(),
            app.cart.unit_count(),
            app.config.format_price(app.cart.total()),
            pane,
            activity,
        );
        (content, Style::default().fg(Color::Gray).bg(Color::Black))
    }

    fn prompt_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}
