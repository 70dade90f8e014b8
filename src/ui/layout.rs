// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The three fixed bands of every screen.
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Splits the results screen: overview on the left, job list above the job
/// details on the right.
pub struct ResultsLayout {
    pub overview: Rect,
    pub jobs: Rect,
    pub detail: Rect,
}

pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        header: main_chunks[0],
        body: main_chunks[1],
        footer: main_chunks[2],
    }
}

pub fn results_layout(body: Rect) -> ResultsLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(body);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[1]);

    ResultsLayout {
        overview: columns[0],
        jobs: right[0],
        detail: right[1],
    }
}

/// A rectangle of the given percentage size centered inside `r`, used for
/// popups and the centered upload/scanning panels.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
