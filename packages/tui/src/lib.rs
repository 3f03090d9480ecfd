//! Copydeck TUI - terminal console for content operations
//!
//! This library provides the terminal frontend for the Copydeck content
//! platform: the generator form, the content library table, and the event
//! loop wiring them to the lifecycle controller.

pub mod app;
pub mod events;
pub mod state;
pub mod table;
pub mod ui;

pub use app::App;
pub use state::AppState;
pub use table::ContentTableView;
