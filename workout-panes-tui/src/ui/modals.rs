// workout-panes-tui/src/ui/modals.rs
use crate::{
    app::{
        state::{ActiveModal, CreateWorkoutField},
        App,
    },
    ui::layout::centered_rect,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use workout_panes_lib::CreationDialog;

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::CreateWorkout {
            dialog,
            focused_field,
            error_message,
        } => render_create_workout_modal(f, dialog, *focused_field, error_message.as_deref()),
        ActiveModal::None => {}
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Global ---").style(Style::new().bold().underlined()),
        Line::from(" q: Quit Application"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(" a: Add New Workout"),
        Line::from(""),
        Line::from("--- Workout List ---").style(Style::new().bold().underlined()),
        Line::from(" k / ↑: Navigate Up"),
        Line::from(" j / ↓: Navigate Down"),
        Line::from(" Enter / l / →: Show Selected Workout"),
        Line::from(""),
        Line::from("--- Workout Details ---").style(Style::new().bold().underlined()),
        Line::from(" Esc / h / ←: Back to List (single pane)"),
        Line::from(""),
        Line::from("Widen the terminal to show list and details side by side."),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().reversed()
    } else {
        Style::default()
    }
}

fn render_create_workout_modal(
    f: &mut Frame,
    dialog: &CreationDialog,
    focused_field: CreateWorkoutField,
    error_message: Option<&str>,
) {
    let block = Block::default()
        .title("Add Workout")
        .borders(Borders::ALL)
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name label
            Constraint::Length(1), // Name input
            Constraint::Length(1), // Description label
            Constraint::Length(1), // Description input
            Constraint::Length(1), // Duration label
            Constraint::Length(1), // Duration input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Difficulty
            Constraint::Length(1), // Icon
            Constraint::Length(1), // Icon hint
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Error
        ])
        .split(area.inner(&Margin {
            vertical: 0,
            horizontal: 1,
        }));

    let text_fields: [(&str, &str, CreateWorkoutField, Rect, Rect); 3] = [
        ("Name:", &dialog.name, CreateWorkoutField::Name, chunks[0], chunks[1]),
        (
            "Description:",
            &dialog.description,
            CreateWorkoutField::Description,
            chunks[2],
            chunks[3],
        ),
        (
            "Duration (e.g. 30 minutes):",
            &dialog.duration,
            CreateWorkoutField::Duration,
            chunks[4],
            chunks[5],
        ),
    ];
    for (label, value, field, label_area, input_area) in text_fields {
        f.render_widget(Paragraph::new(label), label_area);
        f.render_widget(
            Paragraph::new(value).style(focus_style(focused_field == field)),
            input_area,
        );
        if focused_field == field {
            f.set_cursor(input_area.x + value.chars().count() as u16, input_area.y);
        }
    }

    let difficulty = Line::from(vec![
        Span::raw("Difficulty: "),
        Span::styled(
            format!("< {} >", dialog.difficulty()),
            focus_style(focused_field == CreateWorkoutField::Difficulty),
        ),
    ]);
    f.render_widget(Paragraph::new(difficulty), chunks[7]);

    let icon = dialog.selected_icon();
    let icon_line = Line::from(vec![
        Span::raw("Icon: "),
        Span::styled(
            format!("< {} >", icon.label),
            focus_style(focused_field == CreateWorkoutField::Icon),
        ),
    ]);
    f.render_widget(Paragraph::new(icon_line), chunks[8]);
    f.render_widget(
        Paragraph::new(icon.usage_hint.clone()).style(Style::new().italic().fg(Color::DarkGray)),
        chunks[9],
    );

    let button_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[11]);

    let ok_button = Paragraph::new(" OK ")
        .alignment(Alignment::Center)
        .style(focus_style(focused_field == CreateWorkoutField::Confirm));
    f.render_widget(ok_button, button_layout[0]);

    let cancel_button = Paragraph::new(" Cancel ")
        .alignment(Alignment::Center)
        .style(focus_style(focused_field == CreateWorkoutField::Cancel));
    f.render_widget(cancel_button, button_layout[1]);

    if let Some(err) = error_message {
        f.render_widget(
            Paragraph::new(err).style(Style::default().fg(Color::Red)),
            chunks[13],
        );
    }
}
