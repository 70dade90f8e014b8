// src/ui/widgets/upload.rs

use crate::app::{App, ViewState};
use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const FEATURES: [(&str, &str); 3] = [
    ("ATS Compliance", "Ensure your resume passes applicant tracking systems with ease"),
    ("Skill Analysis", "Highlight key skills and receive tailored improvement tips"),
    ("Score & Tips", "Get a comprehensive score with actionable feedback"),
];

/// Renders the upload screen: a path input that doubles as a drop zone,
/// the inline rejection notice, and a short feature list.
pub fn render_upload(frame: &mut Frame, app: &App, area: Rect) {
    let panel = centered_rect(80, 90, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input
            Constraint::Length(4), // Drop zone hint
            Constraint::Length(2), // Notice
            Constraint::Min(0),    // Features
        ])
        .split(panel);

    let title = Text::from(vec![
        Line::from("Upload Your Resume".bold()),
        Line::from("Transform your career with AI-powered resume analysis".fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

    render_input(frame, app, chunks[1]);

    let drop_zone = Paragraph::new(Text::from(vec![
        Line::from("Type a path and press Enter, or drag & drop your resume here"),
        Line::from("PDF files only • Max 10MB".fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(drop_zone, chunks[2]);

    if let ViewState::Upload { notice: Some(notice) } = &app.state {
        let notice = Paragraph::new(Line::from(vec![
            Span::styled("✗ ", Style::default().fg(Color::Red).bold()),
            Span::styled(notice.as_str(), Style::default().fg(Color::Red)),
        ]))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(notice, chunks[3]);
    }

    let mut feature_lines = Vec::new();
    for (title, description) in FEATURES {
        feature_lines.push(Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())));
        feature_lines.push(Line::from(description));
        feature_lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(feature_lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        chunks[4],
    );
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default().borders(Borders::ALL).title("Resume PDF");
    let visible_width = area.width.saturating_sub(2) as usize;
    let char_count = app.input.chars().count();
    // Long paths keep their tail (the file name) in view.
    let skip = char_count.saturating_sub(visible_width.saturating_sub(1));
    let shown: String = app.input.chars().skip(skip).collect();

    let input_paragraph = Paragraph::new(shown.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    frame.set_cursor_position((area.x + shown.chars().count() as u16 + 1, area.y + 1));
}
