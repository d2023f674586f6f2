pub mod navigation;
pub mod state;
pub mod update;

pub use navigation::{handle_key, KeyOutcome};
pub use state::{AppState, Selected, Selection, SelectionPointer, UiState};
pub use update::update;
