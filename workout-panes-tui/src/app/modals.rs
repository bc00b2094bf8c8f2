// workout-panes-tui/src/app/modals.rs
use super::state::{ActiveModal, App, CreateWorkoutField};
use super::AppInputError;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use workout_panes_lib::{CreationDialog, DialogField};

const fn focus_for(field: DialogField) -> CreateWorkoutField {
    match field {
        DialogField::Name => CreateWorkoutField::Name,
        DialogField::Description => CreateWorkoutField::Description,
        DialogField::Duration => CreateWorkoutField::Duration,
    }
}

fn text_input(dialog: &mut CreationDialog, field: CreateWorkoutField) -> Option<&mut String> {
    match field {
        CreateWorkoutField::Name => Some(&mut dialog.name),
        CreateWorkoutField::Description => Some(&mut dialog.description),
        CreateWorkoutField::Duration => Some(&mut dialog.duration),
        _ => None,
    }
}

// --- Input Handling ---

pub fn handle_create_workout_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let mut should_submit = false;
    let mut should_close = false;

    if let ActiveModal::CreateWorkout {
        ref mut dialog,
        ref mut focused_field,
        ref mut error_message,
    } = app.active_modal
    {
        // Always clear error on any input
        *error_message = None;

        let is_back_tab = key.code == KeyCode::BackTab
            || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Tab);

        if key.code == KeyCode::Esc {
            should_close = true;
        } else if is_back_tab || key.code == KeyCode::Up {
            *focused_field = focused_field.previous();
        } else if key.code == KeyCode::Tab || key.code == KeyCode::Down {
            *focused_field = focused_field.next();
        } else if let Some(input) = text_input(dialog, *focused_field) {
            match key.code {
                KeyCode::Char(c) => input.push(c),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Enter => *focused_field = focused_field.next(),
                _ => {}
            }
        } else {
            match (*focused_field, key.code) {
                (CreateWorkoutField::Difficulty, KeyCode::Left) => dialog.cycle_difficulty(false),
                (CreateWorkoutField::Difficulty, KeyCode::Right | KeyCode::Char(' ')) => {
                    dialog.cycle_difficulty(true)
                }
                (CreateWorkoutField::Icon, KeyCode::Left) => dialog.cycle_icon(false),
                (CreateWorkoutField::Icon, KeyCode::Right | KeyCode::Char(' ')) => {
                    dialog.cycle_icon(true)
                }
                (CreateWorkoutField::Difficulty | CreateWorkoutField::Icon, KeyCode::Enter) => {
                    *focused_field = focused_field.next();
                }
                (CreateWorkoutField::Confirm, KeyCode::Enter) => should_submit = true,
                (CreateWorkoutField::Cancel, KeyCode::Enter) => should_close = true,
                _ => {}
            }
        }
    }

    if should_close {
        if let ActiveModal::CreateWorkout { ref mut dialog, .. } = app.active_modal {
            dialog.dismiss();
        }
        app.active_modal = ActiveModal::None;
        return Ok(());
    }

    if should_submit {
        submit_create_workout(app);
    }
    Ok(())
}

// --- Submission Logic ---

fn submit_create_workout(app: &mut App) {
    let mut created = false;
    if let ActiveModal::CreateWorkout {
        ref mut dialog,
        ref mut focused_field,
        ref mut error_message,
    } = app.active_modal
    {
        // The dialog reaches the store through whichever list is mounted
        let result = match app.coordinator.list_panel(&app.host) {
            Some(list) => dialog.submit(list).map_err(AppInputError::from),
            None => Err(AppInputError::NoListMounted),
        };
        match result {
            Ok(_) => created = true,
            Err(e) => {
                if let AppInputError::Validation(validation) = &e {
                    *focused_field = focus_for(validation.field());
                }
                *error_message = Some(e.to_string());
            }
        }
    }

    if created {
        app.active_modal = ActiveModal::None;
        // Highlight the new row; it is appended at the end
        let len = app.service.store().borrow().len();
        app.list_state.select(len.checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workout_panes_lib::{AppService, Config, Host, PanelKind, Slot};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_create_workout_modal_input(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn test_app(width: u16) -> App {
        let service = AppService::with_config(Config::default(), "test_config.toml".into());
        App::new(service, width)
    }

    fn open_dialog(app: &mut App) {
        app.active_modal = ActiveModal::CreateWorkout {
            dialog: CreationDialog::new(),
            focused_field: CreateWorkoutField::Name,
            error_message: None,
        };
    }

    fn jump_to_confirm(app: &mut App) {
        if let ActiveModal::CreateWorkout {
            ref mut focused_field,
            ..
        } = app.active_modal
        {
            *focused_field = CreateWorkoutField::Confirm;
        }
    }

    #[test]
    fn submit_with_empty_name_keeps_dialog_open() {
        let mut app = test_app(60);
        open_dialog(&mut app);
        jump_to_confirm(&mut app);
        handle_create_workout_modal_input(&mut app, key(KeyCode::Enter)).unwrap();

        match &app.active_modal {
            ActiveModal::CreateWorkout {
                focused_field,
                error_message,
                ..
            } => {
                assert_eq!(*focused_field, CreateWorkoutField::Name);
                assert_eq!(error_message.as_deref(), Some("Name is required"));
            }
            other => panic!("dialog closed unexpectedly: {:?}", other),
        }
        assert_eq!(app.service.store().borrow().len(), 4);
    }

    #[test]
    fn typed_workout_is_added_and_highlighted() {
        let mut app = test_app(60);
        open_dialog(&mut app);
        type_text(&mut app, "Row");
        handle_create_workout_modal_input(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "Rowing machine");
        handle_create_workout_modal_input(&mut app, key(KeyCode::Enter)).unwrap();
        type_text(&mut app, "20 minutes");
        jump_to_confirm(&mut app);
        handle_create_workout_modal_input(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.active_modal, ActiveModal::None);
        let store = app.service.store();
        let created = store.borrow().find_by_id(5).cloned().expect("record 5");
        assert_eq!(created.name, "Row");
        assert_eq!(created.description, "Rowing machine");
        assert_eq!(app.list_state.selected(), Some(4));
    }

    #[test]
    fn submit_without_list_reports_error() {
        let mut app = test_app(60);
        app.select_highlighted();
        app.tick();
        assert_eq!(app.primary_kind(), Some(PanelKind::Detail));

        open_dialog(&mut app);
        type_text(&mut app, "Bike");
        if let ActiveModal::CreateWorkout { ref mut dialog, .. } = app.active_modal {
            dialog.description = "Spin".into();
            dialog.duration = "15 minutes".into();
        }
        jump_to_confirm(&mut app);
        handle_create_workout_modal_input(&mut app, key(KeyCode::Enter)).unwrap();

        match &app.active_modal {
            ActiveModal::CreateWorkout { error_message, .. } => assert_eq!(
                error_message.as_deref(),
                Some("Open the workout list to add a workout.")
            ),
            other => panic!("dialog closed unexpectedly: {:?}", other),
        }
        assert_eq!(app.service.store().borrow().len(), 4);
    }

    #[test]
    fn escape_discards_dialog() {
        let mut app = test_app(120);
        open_dialog(&mut app);
        type_text(&mut app, "Draft");
        handle_create_workout_modal_input(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.active_modal, ActiveModal::None);
        assert_eq!(app.service.store().borrow().len(), 4);
        assert!(app.host.panel_in(Slot::Secondary).is_some());
    }
}
