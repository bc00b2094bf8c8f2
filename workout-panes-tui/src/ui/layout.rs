// workout-panes-tui/src/ui/layout.rs
use crate::{
    app::{state::ActiveModal, App},
    ui::{modals::render_modal, panels::render_slot, status_bar::render_status_bar},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use workout_panes_lib::{PresentationMode, Slot, StandardColor};

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Header on top, panes below, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Status Bar
        ])
        .split(size);

    render_header(f, app, main_chunks[0]);
    render_panes(f, app, main_chunks[1]);
    render_status_bar(f, app, main_chunks[2]);

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let color = app
        .service
        .config
        .header_color()
        .map(theme_color)
        .unwrap_or(Color::Green);
    let mode = match app.mode {
        PresentationMode::SinglePane => "Single pane",
        PresentationMode::DualPane => "Dual pane",
    };
    let header = Paragraph::new(format!("Workouts ({})", mode))
        .alignment(Alignment::Center)
        .style(Style::new().fg(color).bold())
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

// One container per slot of the current layout
fn render_panes(f: &mut Frame, app: &mut App, area: Rect) {
    match app.mode {
        PresentationMode::SinglePane => render_slot(f, app, Slot::Primary, area),
        PresentationMode::DualPane => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(area);
            render_slot(f, app, Slot::Primary, chunks[0]);
            render_slot(f, app, Slot::Secondary, chunks[1]);
        }
    }
}

const fn theme_color(color: StandardColor) -> Color {
    match color {
        StandardColor::Black => Color::Black,
        StandardColor::Red => Color::LightRed,
        StandardColor::Green => Color::LightGreen,
        StandardColor::Yellow => Color::LightYellow,
        StandardColor::Blue => Color::LightBlue,
        StandardColor::Magenta => Color::LightMagenta,
        StandardColor::Cyan => Color::LightCyan,
        StandardColor::White => Color::White,
        StandardColor::DarkGrey => Color::DarkGray,
        StandardColor::DarkRed => Color::Red,
        StandardColor::DarkGreen => Color::Green,
        StandardColor::DarkYellow => Color::Yellow,
        StandardColor::DarkBlue => Color::Blue,
        StandardColor::DarkMagenta => Color::Magenta,
        StandardColor::DarkCyan => Color::Cyan,
        StandardColor::Grey => Color::Gray,
    }
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
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
