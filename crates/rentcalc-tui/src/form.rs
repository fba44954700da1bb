//! Income and city input panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use rentcalc_core::City;

use crate::keymap::Focus;
use crate::styles::ColorTheme;

/// Render the two-field form: income text input and city selector.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    income: &str,
    city: Option<City>,
    focus: Focus,
    theme: &ColorTheme,
) {
    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    render_income_field(frame, fields[0], income, focus == Focus::Income, theme);
    render_city_field(frame, fields[1], city, focus == Focus::City, theme);
}

fn render_income_field(
    frame: &mut Frame,
    area: Rect,
    income: &str,
    focused: bool,
    theme: &ColorTheme,
) {
    let mut spans = vec![Span::styled("£ ", theme.header_style())];
    if income.is_empty() {
        spans.push(Span::styled("e.g. 65000", theme.muted_style()));
    } else {
        spans.push(Span::styled(income.to_string(), theme.text_style()));
    }
    if focused {
        spans.push(Span::styled("▏", theme.focus_style()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Annual household income ")
        .border_style(if focused {
            theme.focus_style()
        } else {
            theme.border_style()
        });

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_city_field(
    frame: &mut Frame,
    area: Rect,
    city: Option<City>,
    focused: bool,
    theme: &ColorTheme,
) {
    let mut spans = match city {
        Some(city) => vec![Span::styled(city.label(), theme.text_style())],
        None => vec![Span::styled("Select a city", theme.muted_style())],
    };
    if focused {
        spans.push(Span::styled("  ↑/↓ to choose", theme.muted_style()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Where are you looking to rent? ")
        .border_style(if focused {
            theme.focus_style()
        } else {
            theme.border_style()
        });

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
