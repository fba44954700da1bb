//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the footer panel with keyboard shortcuts and attribution.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let text = vec![
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": switch field | "),
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(": choose city | "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": search | "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": quit"),
        ]),
        Line::from(vec![Span::styled(
            "© 2025 RentCalc — Affordability Calculator | github.com/rentcalc-rs/rentcalc",
            theme.muted_style(),
        )]),
    ];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
