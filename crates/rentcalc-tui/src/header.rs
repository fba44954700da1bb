//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let text = vec![Line::from(vec![
        Span::styled("Affordability Calculator", theme.header_style()),
        Span::raw(" | Enter your household's annual salary to get an estimate"),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" RentCalc ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
