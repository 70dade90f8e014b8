// src/ui/widgets/header.rs

use crate::app::{App, ViewState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title bar: product name on the left, what is being analysed
/// and which backend is in use on the right.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled("ResumeScope", Style::new().bold().fg(Color::Cyan)),
        Span::raw("  AI résumé analysis"),
    ]);

    let context = match &app.state {
        ViewState::Results { file_name, analyzed_at, .. } => {
            format!("{file_name} · analysed {} · {}", analyzed_at.format("%H:%M"), app.backend_label)
        }
        ViewState::Scanning { file_name, .. } => format!("{file_name} · {}", app.backend_label),
        _ => app.backend_label.clone(),
    };

    frame.render_widget(Paragraph::new(title), inner);
    frame.render_widget(
        Paragraph::new(Span::styled(context, Style::default().fg(Color::DarkGray))).alignment(Alignment::Right),
        inner,
    );
}
