// workout-panes-tui/src/app/state.rs
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use workout_panes_lib::{
    Activation, AppService, CreationDialog, LayoutCoordinator, ListRow, PanelHost,
    PresentationMode,
};

// Fields within the Create Workout modal, in focus order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateWorkoutField {
    Name,
    Description,
    Duration,
    Difficulty,
    Icon,
    Confirm,
    Cancel,
}

impl CreateWorkoutField {
    const ORDER: [CreateWorkoutField; 7] = [
        CreateWorkoutField::Name,
        CreateWorkoutField::Description,
        CreateWorkoutField::Duration,
        CreateWorkoutField::Difficulty,
        CreateWorkoutField::Icon,
        CreateWorkoutField::Confirm,
        CreateWorkoutField::Cancel,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    CreateWorkout {
        dialog: CreationDialog,
        focused_field: CreateWorkoutField,
        error_message: Option<String>,
    },
}

// Holds the application state
pub struct App {
    pub service: AppService,
    pub coordinator: LayoutCoordinator,
    pub host: PanelHost,
    pub mode: PresentationMode, // Mode of the last activation
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub last_error: Option<String>, // For status bar errors
    pub error_clear_time: Option<Instant>,

    // === List panel view state ===
    pub list_rows: Vec<ListRow>,
    pub list_state: ListState,
}

impl App {
    pub fn new(service: AppService, width: u16) -> Self {
        let mode = service.mode_for_width(width);
        let mut host = PanelHost::new(mode);
        let mut coordinator = service.coordinator();
        let activation = Activation::fresh(&host);
        coordinator.activate(&mut host, activation);

        let mut app = App {
            service,
            coordinator,
            host,
            mode,
            should_quit: false,
            active_modal: ActiveModal::None,
            last_error: None,
            error_clear_time: None,
            list_rows: Vec::new(),
            list_state: ListState::default(),
        };
        app.list_state.select(Some(0));
        app.tick();
        app
    }

    // Method to set status bar errors
    pub fn set_error(&mut self, msg: String) {
        self.last_error = Some(msg);
        self.error_clear_time = Some(Instant::now() + Duration::from_secs(5));
    }

    // Method to clear expired error messages (called every tick)
    pub(crate) fn clear_expired_error(&mut self) {
        if let Some(clear_time) = self.error_clear_time {
            if Instant::now() >= clear_time {
                self.last_error = None;
                self.error_clear_time = None;
            }
        }
    }
}
