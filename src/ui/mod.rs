// src/ui/mod.rs

use crate::app::{App, ViewState};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::header::render_header(frame, app, layout.header);

    // One screen per view-state; nothing else decides what is visible.
    match app.state {
        ViewState::Upload { .. } => widgets::upload::render_upload(frame, app, layout.body),
        ViewState::Scanning { .. } => widgets::scanning::render_scanning(frame, app, layout.body),
        ViewState::Results { .. } => {
            let results = layout::results_layout(layout.body);
            widgets::summary::render_summary(frame, app, results.overview);
            widgets::results::render_results(frame, app, results.jobs, results.detail);
        }
        ViewState::Error { .. } => widgets::error_popup::render_error_popup(frame, app, layout.body),
    }

    widgets::footer::render_footer(frame, app, layout.footer);
}
