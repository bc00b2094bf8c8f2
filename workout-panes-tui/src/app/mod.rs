//src/app/mod.rs
use thiserror::Error;
use workout_panes_lib::ValidationError;

// Declare the modules within the app directory
pub mod input;
pub mod layout;
pub mod modals;
pub mod navigation_helpers;
pub mod state;

// Re-export the main App struct and other necessary types for convenience
pub use state::{ActiveModal, App, CreateWorkoutField};

// Define App-specific errors here
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppInputError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Open the workout list to add a workout.")]
    NoListMounted,
}
