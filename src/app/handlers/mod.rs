//! Feature-Handler: führen Commands auf dem AppState aus.

pub mod editing;
pub mod path_drag;
pub mod play_io;
pub mod player_drag;
