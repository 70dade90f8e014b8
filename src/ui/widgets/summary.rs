// src/ui/widgets/summary.rs

use crate::app::App;
use crate::core::models::{AnalysisResult, ExperienceLevel};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

/// Rating shown next to the overall score.
pub fn score_rating(score: u8) -> (&'static str, Color) {
    match score {
        90..=100 => ("Excellent", Color::Green),
        75..=89 => ("Good", Color::Blue),
        60..=74 => ("Fair", Color::Yellow),
        _ => ("Needs Improvement", Color::Red),
    }
}

/// Renders the résumé overview: score gauge on top, then a scrollable list
/// of experience, contact, strengths, improvements and skills.
pub fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(analysis) = app.analysis() else {
        return;
    };
    let score = analysis.score;
    let lines = overview_lines(analysis);

    let container = Block::default().borders(Borders::ALL).title("Resume Overview (PgUp/PgDn)");
    let inner = container.inner(area);
    frame.render_widget(container, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Score & rating
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Details
        ])
        .split(inner);

    // --- Score & Rating ---
    let (rating, color) = score_rating(score);
    let score_text = Text::from(vec![
        Line::from("Overall Score".bold()),
        Line::from(format!("{score}/100 ({rating})")).style(Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), chunks[0]);

    let gauge = Gauge::default()
        .percent(u16::from(score))
        .label("")
        .gauge_style(Style::default().fg(color));
    frame.render_widget(gauge, chunks[1]);

    // --- Details, scrollable ---
    let [text_area, _scrollbar] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]).areas(chunks[3]);
    let details = Paragraph::new(lines).wrap(Wrap { trim: true });

    // Bullets wrap in the narrow column, so the limit comes from rendered rows.
    let rows = details.line_count(text_area.width);
    let max_offset = rows.saturating_sub(text_area.height as usize);
    app.scroll_offset = app.scroll_offset.min(max_offset);
    app.overview_scroll_state = app
        .overview_scroll_state
        .content_length(max_offset + 1)
        .position(app.scroll_offset);

    frame.render_widget(details.scroll((app.scroll_offset as u16, 0)), text_area);

    if max_offset > 0 {
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            chunks[3],
            &mut app.overview_scroll_state,
        );
    }
}

fn overview_lines(analysis: &AnalysisResult) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    section(&mut lines, "EXPERIENCE");
    let level_style = match analysis.experience.level {
        ExperienceLevel::Senior => Style::default().fg(Color::Green),
        ExperienceLevel::MidLevel => Style::default().fg(Color::Blue),
        ExperienceLevel::Junior => Style::default().fg(Color::Gray),
    };
    lines.push(Line::from(vec![
        Span::raw(format!("{} years  ", analysis.experience.years)),
        Span::styled(analysis.experience.level.to_string(), level_style),
    ]));
    lines.push(Line::from(analysis.education.clone()));

    section(&mut lines, "CONTACT");
    for (label, present) in [
        ("Email", analysis.contact.email),
        ("Phone", analysis.contact.phone),
        ("LinkedIn", analysis.contact.linkedin),
    ] {
        let (icon, style) = if present {
            ("✓", Style::default().fg(Color::Green))
        } else {
            ("✗", Style::default().fg(Color::Red))
        };
        lines.push(Line::from(vec![Span::styled(format!("{icon} "), style), Span::raw(label)]));
    }

    section(&mut lines, "STRENGTHS");
    bullets(&mut lines, &analysis.strengths, Color::Green);

    section(&mut lines, "AREAS FOR IMPROVEMENT");
    bullets(&mut lines, &analysis.improvements, Color::Yellow);

    section(&mut lines, "KEYWORDS FOUND");
    lines.push(joined_or_none(&analysis.keywords));

    section(&mut lines, "TECHNICAL SKILLS");
    lines.push(joined_or_none(&analysis.skills.technical));

    section(&mut lines, "SOFT SKILLS");
    lines.push(joined_or_none(&analysis.skills.soft));

    lines
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str) {
    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(title.bold()));
}

fn bullets(lines: &mut Vec<Line<'static>>, items: &[String], color: Color) {
    for item in items {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(color)),
            Span::raw(item.clone()),
        ]));
    }
}

fn joined_or_none(items: &[String]) -> Line<'static> {
    if items.is_empty() {
        Line::from("None detected".fg(Color::DarkGray))
    } else {
        Line::from(Span::styled(items.join(", "), Style::default().fg(Color::Cyan)))
    }
}
