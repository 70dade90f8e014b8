// src/ui/widgets/results.rs

use crate::app::{App, ViewState};
use crate::core::models::JobMatch;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Color band for a job's alignment percentage.
pub fn alignment_color(score: u8) -> Color {
    match score {
        85..=100 => Color::Green,
        70..=84 => Color::Blue,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Renders the job list and, below it, the details of the selected job.
pub fn render_results(frame: &mut Frame, app: &mut App, list_area: Rect, detail_area: Rect) {
    // Borrow the state and the list selection separately so the list can be
    // rendered statefully while its items still point into the analysis.
    let App { state, job_list_state, .. } = app;
    let ViewState::Results { analysis, .. } = state else {
        return;
    };

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Job Matches ({}) (Navigate with ↑ ↓)", analysis.job_matches.len()));

    if analysis.job_matches.is_empty() {
        let empty = Paragraph::new("The backend found no matching jobs for this resume.")
            .alignment(Alignment::Center)
            .block(list_block);
        frame.render_widget(empty, list_area);
        frame.render_widget(Block::default().borders(Borders::ALL).title("Details"), detail_area);
        return;
    }

    let items: Vec<ListItem> = analysis
        .job_matches
        .iter()
        .map(|job| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}% ", job.alignment_score),
                    Style::default().fg(alignment_color(job.alignment_score)).bold(),
                ),
                Span::raw(job.title.as_str()),
                Span::styled(format!(" · {}", job.company), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(list_block)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, list_area, job_list_state);

    let detail_block = Block::default().borders(Borders::ALL).title("Details");
    let selected = job_list_state.selected().and_then(|i| analysis.job_matches.get(i));
    let text = match selected {
        Some(job) => job_detail_text(job),
        None => Text::from("Select a job above to see details."),
    };
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block), detail_area);
}

fn job_detail_text(job: &JobMatch) -> Text<'_> {
    let color = alignment_color(job.alignment_score);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(job.title.as_str(), Style::default().bold()),
            Span::raw(format!("  {}", job.company)),
        ]),
        Line::from(
            format!("{} · {} · {}", job.location, job.employment_type, job.salary).fg(Color::DarkGray),
        ),
        Line::from(vec![
            Span::styled(format!("{}% Match", job.alignment_score), Style::default().fg(color).bold()),
            Span::styled(
                format!("  ({} required skills)", job.required_skills.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(job.description.as_str()),
        Line::from(""),
        Line::from(format!("Matching Skills ({})", job.matching_skills.len()).green().bold()),
        Line::from(skill_list(&job.matching_skills)),
        Line::from(format!("Missing Skills ({})", job.missing_skills.len()).red().bold()),
        Line::from(skill_list(&job.missing_skills)),
    ];

    if !job.requirements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from("KEY REQUIREMENTS".yellow().bold()));
        for requirement in job.requirements.iter().take(3) {
            lines.push(Line::from(format!("• {requirement}")));
        }
    }

    if !job.improvement_advice.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from("HOW TO IMPROVE:".yellow().bold()));
        for advice in &job.improvement_advice {
            lines.push(Line::from(format!("• {advice}")));
        }
    }

    lines.push(Line::from(""));
    let apply = if job.url.is_empty() {
        Span::styled("No application link provided", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(job.url.as_str(), Style::default().fg(Color::Cyan).underlined())
    };
    lines.push(Line::from(vec![Span::raw("Apply: "), apply]));

    Text::from(lines)
}

fn skill_list(skills: &[String]) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_bands() {
        assert_eq!(alignment_color(85), Color::Green);
        assert_eq!(alignment_color(84), Color::Blue);
        assert_eq!(alignment_color(50), Color::Yellow);
        assert_eq!(alignment_color(49), Color::Red);
    }

    #[test]
    fn detail_shows_only_three_requirements() {
        let job = JobMatch {
            id: "1".into(),
            title: "X".into(),
            company: "Y".into(),
            location: "Unknown".into(),
            salary: "Unknown".into(),
            employment_type: "Full-time".into(),
            alignment_score: 80,
            required_skills: vec![],
            matching_skills: vec![],
            missing_skills: vec![],
            description: String::new(),
            requirements: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            url: String::new(),
            improvement_advice: vec![],
        };
        let text = job_detail_text(&job);
        let rendered: Vec<String> = text.lines.iter().map(|l| l.to_string()).collect();
        assert!(rendered.contains(&"• c".to_string()));
        assert!(!rendered.contains(&"• d".to_string()));
        assert!(rendered.contains(&"Apply: No application link provided".to_string()));
    }
}
