// src/ui/widgets/error_popup.rs

use crate::app::{App, ViewState};
use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the failed-scan popup. The message is shown exactly as the
/// controller captured it; the only way out is starting over.
pub fn render_error_popup(frame: &mut Frame, app: &App, area: Rect) {
    let ViewState::Error { message } = &app.state else {
        return;
    };

    let text = Text::from(vec![
        Line::from("ANALYSIS FAILED".bold().red()),
        Line::from(""),
        Line::from(message.as_str()),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to try again".bold()),
    ]);

    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(70, 50, area);
    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
