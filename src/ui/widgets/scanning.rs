// src/ui/widgets/scanning.rs

use crate::app::App;
use crate::core::progress::SCAN_STEPS;
use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Renders the scanning animation. Progress follows the clock only; the
/// backend reports nothing until it is done.
pub fn render_scanning(frame: &mut Frame, app: &App, area: Rect) {
    let Some(progress) = app.progress() else {
        return;
    };
    let file_name = app.file_name().unwrap_or_default();

    let panel = centered_rect(70, 70, area);
    let block = Block::default().borders(Borders::ALL).title("Analyzing Your Resume");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),                        // File name + spinner
            Constraint::Length(1),                        // Gauge
            Constraint::Length(1),                        // Spacer
            Constraint::Length(SCAN_STEPS.len() as u16),  // Steps
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Line::from(vec![
        Span::styled(format!("{} ", progress.spinner()), Style::default().fg(Color::Cyan)),
        Span::raw("Scanning "),
        Span::styled(file_name, Style::default().bold()),
    ]);
    frame.render_widget(Paragraph::new(heading).alignment(Alignment::Center), chunks[0]);

    let gauge = Gauge::default()
        .percent(progress.percent)
        .label(format!("{}%", progress.percent))
        .gauge_style(Style::default().fg(Color::Blue));
    frame.render_widget(gauge, chunks[1]);

    let steps: Vec<Line> = SCAN_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let (icon, style) = if index < progress.current_step {
                ("✓", Style::default().fg(Color::Green))
            } else if index == progress.current_step {
                (progress.spinner(), Style::default().fg(Color::Cyan).bold())
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            Line::from(vec![Span::styled(format!("{icon} "), style), Span::styled(step.label, style)])
        })
        .collect();
    frame.render_widget(Paragraph::new(steps), chunks[3]);
}
