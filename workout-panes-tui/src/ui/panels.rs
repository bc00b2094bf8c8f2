// workout-panes-tui/src/ui/panels.rs
use crate::app::App;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use workout_panes_lib::{DetailPanel, Host, IconId, Panel, Slot};

pub fn render_slot(f: &mut Frame, app: &mut App, slot: Slot, area: Rect) {
    let panel = app.host.panel_in(slot).map(|m| m.panel.clone());
    match panel {
        Some(Panel::List(_)) => render_list_panel(f, app, area),
        Some(Panel::Detail(detail)) => render_detail_panel(f, &detail, area),
        None => f.render_widget(Block::default().borders(Borders::ALL), area),
    }
}

// Terminal stand-ins for the catalog's icon resources
fn icon_glyph(icon_id: &IconId) -> &'static str {
    match icon_id.as_str() {
        "directions" => "»",
        "manage" => "▣",
        "rotate" => "↻",
        "compass" => "✣",
        "gallery" => "❀",
        "mylocation" => "◎",
        "send" => "➤",
        "today" => "▦",
        "preferences" => "✱",
        "view" => "◉",
        "upload" => "▲",
        "set_as" => "◆",
        _ => "•",
    }
}

fn render_list_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let list_items: Vec<ListItem> = app
        .list_rows
        .iter()
        .map(|row| ListItem::new(format!("{} {}", icon_glyph(&row.icon.icon_id), row.name)))
        .collect();

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title("Workouts")
        .border_style(Style::default().fg(Color::Yellow));

    let list = List::new(list_items)
        .block(list_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_detail_panel(f: &mut Frame, detail: &DetailPanel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Details")
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(block, area);

    // No record behind the id: the panel stays blank
    let Some(view) = detail.view() else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", icon_glyph(&view.icon.icon_id)),
                Style::new().fg(Color::Cyan),
            ),
            Span::styled(view.icon.label.clone(), Style::new().italic()),
        ]),
        Line::from(""),
        Line::from(view.name.clone()).style(Style::new().bold()),
        Line::from(""),
        Line::from(view.description.clone()),
        Line::from(""),
        Line::from(view.duration_line.clone()),
        Line::from(view.difficulty_line.clone()),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 2,
        }),
    );
}
