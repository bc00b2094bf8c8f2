// workout-panes-tui/src/ui/status_bar.rs
use crate::app::{state::ActiveModal, App};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use workout_panes_lib::{PanelKind, PresentationMode};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.active_modal {
        ActiveModal::None => match (app.mode, app.primary_kind()) {
            (PresentationMode::SinglePane, Some(PanelKind::Detail)) => {
                " [Esc/h] Back | [a]dd | [?] Help | [q]uit "
            }
            _ => " [↑↓/jk] Nav | [Enter] Show | [a]dd | [?] Help | [q]uit ",
        },
        ActiveModal::Help => " [Esc/Enter/?] Close Help ",
        ActiveModal::CreateWorkout { .. } => {
            " [Esc] Cancel | [Enter] Confirm/Next | [Tab/↑↓] Navigate | [←→] Change "
        }
    };

    let error_text = app.last_error.as_deref().unwrap_or("");

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let error_paragraph = Paragraph::new(error_text)
        .style(Style::default().bg(Color::DarkGray).fg(Color::Red))
        .alignment(Alignment::Right);
    f.render_widget(error_paragraph, status_chunks[1]);
}
