// src/app/input.rs
use super::{
    modals::handle_create_workout_modal_input,
    navigation_helpers::{list_next, list_previous},
    state::{ActiveModal, App, CreateWorkoutField},
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use workout_panes_lib::CreationDialog;

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            return self.handle_modal_input(key);
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::Char('a') => self.open_create_workout_modal(),
            KeyCode::Char('k') | KeyCode::Up if self.list_is_mounted() => {
                list_previous(&mut self.list_state, self.list_rows.len());
            }
            KeyCode::Char('j') | KeyCode::Down if self.list_is_mounted() => {
                list_next(&mut self.list_state, self.list_rows.len());
            }
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.select_highlighted(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                self.go_back();
            }
            _ => {}
        }
        Ok(())
    }

    fn open_create_workout_modal(&mut self) {
        self.active_modal = ActiveModal::CreateWorkout {
            dialog: CreationDialog::new(),
            focused_field: CreateWorkoutField::Name,
            error_message: None,
        };
    }

    // --- Modal Input Handling ---
    fn handle_modal_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.active_modal {
            ActiveModal::Help => self.handle_help_modal_input(key),
            ActiveModal::CreateWorkout { .. } => handle_create_workout_modal_input(self, key)?,
            ActiveModal::None => {}
        }
        Ok(())
    }

    fn handle_help_modal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                self.active_modal = ActiveModal::None;
            }
            _ => {} // Ignore other keys in help
        }
    }
}
