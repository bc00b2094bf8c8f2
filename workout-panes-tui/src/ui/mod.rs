mod layout;
mod modals;
mod panels;
mod status_bar;

// Re-export the main render function
pub use layout::render_ui;
