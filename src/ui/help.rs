use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

// Help section definitions
pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Browsing:",
        items: &[
            ("⇥/⇤", "Switch pane (categories, plants, cart)"),
            ("hjkl", "Move within the pane (arrows work too)"),
            ("PgUp/PgDn", "Scroll the plant grid"),
            ("0", "All Trees"),
            ("1-9", "Jump to a category"),
        ],
    },
    HelpSection {
        title: "Plants:",
        items: &[
            ("⏎", "Show plant details"),
            ("a/␣", "Add to cart"),
        ],
    },
    HelpSection {
        title: "Cart:",
        items: &[("d/x/Del", "Remove the selected line")],
    },
    HelpSection {
        title: "Plant details:",
        items: &[
            ("a/⏎", "Add to cart and close"),
            ("c", "Close"),
            ("Esc", "Close"),
        ],
    },
    HelpSection {
        title: "Other:",
        items: &[
            ("p", "Pledge to plant a tree"),
            ("?", "This help"),
            ("q", "Quit"),
        ],
    },
];

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help_text = Self::build_help_text();
        let block = Block::default().borders(Borders::ALL).title(" Help ");
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![Span::styled("Green Earth Help", bold)]),
            Line::from(""),
        ];

        for section in SECTIONS {
            lines.push(Line::from(vec![Span::styled(section.title, bold)]));
            lines.extend(
                section
                    .items
                    .iter()
                    .map(|(key, desc)| Line::from(format!("  {:<8} {}", key, desc))),
            );
            lines.push(Line::from(""));
        }

        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }

    /// Plain-text form of the help page.
    pub fn plain_text() -> String {
        Self::build_help_text()
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
