//! Results panel (animated rent figure, bills estimate) and the search
//! action panel.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use rentcalc_core::currency::format_gbp;
use rentcalc_core::SearchAction;

use crate::styles::ColorTheme;

/// A snapshot of everything the results panel displays.
#[derive(Debug, Clone)]
pub struct ResultsView {
    /// The animator's currently displayed value.
    pub animated_rent: i64,
    /// Whether a rent could be derived at all.
    pub rent_positive: bool,
    /// Bill estimate for the selected city.
    pub bills_gbp: u32,
    /// Whether a city is selected.
    pub city_selected: bool,
}

/// Render the read-only results panel.
pub fn render_results(frame: &mut Frame, area: Rect, view: &ResultsView, theme: &ColorTheme) {
    let mut lines = Vec::new();

    if view.rent_positive {
        lines.push(Line::styled(
            "We estimate that the monthly rent you could afford on this salary is",
            theme.text_style(),
        ));
        lines.push(Line::from(Span::styled(
            format_gbp(view.animated_rent),
            theme.figure_style(),
        )));
        if view.city_selected {
            lines.push(Line::from(vec![
                Span::styled("Plus monthly bills for a 2-bed ", theme.text_style()),
                Span::styled(
                    format!("{}~", format_gbp(i64::from(view.bills_gbp))),
                    theme.text_style().add_modifier(Modifier::BOLD),
                ),
            ]));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Enter your annual salary to start",
            theme.muted_style().add_modifier(Modifier::ITALIC),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(" Estimate ");
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render the primary action control and the one-line status underneath.
pub fn render_action(
    frame: &mut Frame,
    area: Rect,
    action: SearchAction,
    status: Option<&str>,
    theme: &ColorTheme,
) {
    let label_style = if action.is_enabled() {
        theme.action_style()
    } else {
        theme.muted_style()
    };

    let lines = vec![
        Line::from(Span::styled(action.label(), label_style)),
        Line::from(Span::styled(
            status.unwrap_or_default().to_string(),
            theme.muted_style(),
        )),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Search ");
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_content(draw: impl Fn(&mut Frame)) -> String {
        let backend = TestBackend::new(90, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(|frame| draw(frame)).unwrap();

        (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn settled_rent_is_formatted_as_currency() {
        let theme = ColorTheme::default();
        let view = ResultsView {
            animated_rent: 2000,
            rent_positive: true,
            bills_gbp: 0,
            city_selected: false,
        };
        let content = buffer_content(|frame| {
            let area = frame.area();
            render_results(frame, area, &view, &theme);
        });
        assert!(content.contains("£2,000"));
        assert!(content.contains("monthly rent you could afford"));
        assert!(!content.contains("Plus monthly bills"));
    }

    #[test]
    fn city_selection_adds_the_bills_line() {
        let theme = ColorTheme::default();
        let view = ResultsView {
            animated_rent: 2000,
            rent_positive: true,
            bills_gbp: 300,
            city_selected: true,
        };
        let content = buffer_content(|frame| {
            let area = frame.area();
            render_results(frame, area, &view, &theme);
        });
        assert!(content.contains("Plus monthly bills for a 2-bed"));
        assert!(content.contains("£300~"));
    }

    #[test]
    fn no_rent_shows_helper_prompt() {
        let theme = ColorTheme::default();
        let view = ResultsView {
            animated_rent: 0,
            rent_positive: false,
            bills_gbp: 300,
            city_selected: true,
        };
        let content = buffer_content(|frame| {
            let area = frame.area();
            render_results(frame, area, &view, &theme);
        });
        assert!(content.contains("Enter your annual salary to start"));
        assert!(!content.contains("Plus monthly bills"));
    }

    #[test]
    fn action_panel_shows_label_and_status() {
        let theme = ColorTheme::default();
        let content = buffer_content(|frame| {
            let area = frame.area();
            render_action(
                frame,
                area,
                SearchAction::SearchNow,
                Some("Opened search for London"),
                &theme,
            );
        });
        assert!(content.contains("Search now"));
        assert!(content.contains("Opened search for London"));
    }

    #[test]
    fn disabled_action_shows_prompt_label() {
        let theme = ColorTheme::default();
        let content = buffer_content(|frame| {
            let area = frame.area();
            render_action(
                frame,
                area,
                SearchAction::SelectCityAndIncome,
                None,
                &theme,
            );
        });
        assert!(content.contains("Select a city and income to search available properties"));
    }
}
