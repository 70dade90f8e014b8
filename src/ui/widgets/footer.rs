// src/ui/widgets/footer.rs

use crate::app::{App, ViewState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::new().bold().fg(Color::Yellow));

    let spans = match app.state {
        ViewState::Upload { .. } => Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to analyze, drop a file to upload, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        ViewState::Scanning { .. } => Line::from(vec![
            Span::raw("Analyzing... "),
            key("Ctrl+C"),
            Span::raw(" to quit."),
        ]),
        ViewState::Results { .. } => Line::from(vec![
            key("[N]"),
            Span::raw("ew Scan, "),
            key("[↑↓]"),
            Span::raw(" Jobs, "),
            key("[PgUp/PgDn]"),
            Span::raw(" Overview, "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
        ViewState::Error { .. } => Line::from(vec![
            key("[Enter]"),
            Span::raw(" Try Again, "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
